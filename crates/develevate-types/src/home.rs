//! Landing page content as data

use crate::menu::Icon;

/// Feature card on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    /// Gradient class suffix, e.g. `from-blue-500 to-cyan-500`
    pub color: &'static str,
}

/// Bullet next to the editor preview
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Highlight {
    pub icon: Icon,
    pub text: &'static str,
}

pub fn features() -> [Feature; 4] {
    [
        Feature {
            icon: Icon::Code2,
            title: "Multi-Language Support",
            description:
                "Practice with C, C++, Java, Python, JavaScript, SQL, HTML, CSS, and React",
            color: "from-blue-500 to-cyan-500",
        },
        Feature {
            icon: Icon::Zap,
            title: "AI-Powered Hints",
            description: "Get intelligent hints and code reviews powered by advanced AI",
            color: "from-purple-500 to-pink-500",
        },
        Feature {
            icon: Icon::Trophy,
            title: "Competitive Programming",
            description: "Join contests and climb the leaderboard with other developers",
            color: "from-yellow-500 to-orange-500",
        },
        Feature {
            icon: Icon::Users,
            title: "Community Driven",
            description: "Learn from community solutions and share your own approaches",
            color: "from-green-500 to-emerald-500",
        },
    ]
}

pub fn editor_highlights() -> [Highlight; 3] {
    [
        Highlight {
            icon: Icon::Star,
            text: "Intelligent code completion",
        },
        Highlight {
            icon: Icon::GitBranch,
            text: "Version control integration",
        },
        Highlight {
            icon: Icon::Zap,
            text: "Lightning-fast execution",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feature_titles_unique() {
        let mut titles: Vec<_> = features().iter().map(|f| f.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 4);
    }
}
