/// One shipped app. Entries are immutable and live for the whole session;
/// catalog order is significant (the gallery staggers reveals by index).
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Project {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub description: &'static str,
    pub color: &'static str,
    pub accent_color: &'static str,
    pub icon: Option<&'static str>,
}

const PROJECTS: &[Project] = &[
    Project {
        id: "chain-reaction",
        name: "Chain Reaction",
        tagline: "One tap. Total mayhem.",
        description: "A fast-paced puzzle game where a single spark sets off \
            cascading explosions across the board. Easy to pick up, hard to put \
            down, and best played against friends.",
        color: "#3b82f6",
        accent_color: "#60a5fa",
        icon: Some("/assets/chain-reaction.webp"),
    },
    Project {
        id: "escape-game",
        name: "Escape Game",
        tagline: "Every room hides a way out.",
        description: "Handcrafted escape rooms in your pocket. Search scenes, \
            combine clues and crack locks against the clock, solo or passing the \
            phone around the table.",
        color: "#8b5cf6",
        accent_color: "#a78bfa",
        icon: Some("/assets/escape-game.webp"),
    },
    Project {
        id: "roamates",
        name: "Roamates",
        tagline: "Household life, handled together.",
        description: "Shared chores, groceries and bills for people living \
            together. Roamates keeps the flat running without the passive \
            aggressive sticky notes.",
        color: "#10b981",
        accent_color: "#34d399",
        icon: Some("/assets/roamates.webp"),
    },
];

pub fn projects() -> &'static [Project] {
    PROJECTS
}

/// Exact-match lookup by slug. Unknown slugs are a defined miss, not an error.
pub fn get_project(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.id == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_hit_returns_matching_project() {
        let project = get_project("chain-reaction").expect("known slug");
        assert_eq!(project.name, "Chain Reaction");
    }

    #[test]
    fn test_lookup_is_exact_match_only() {
        assert!(get_project("unknown").is_none());
        assert!(get_project("Chain-Reaction").is_none(), "lookup is case sensitive");
        assert!(get_project("chain").is_none(), "no prefix matching");
        assert!(get_project("").is_none());
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        for (i, a) in projects().iter().enumerate() {
            for b in projects().iter().skip(i + 1) {
                assert_ne!(a.id, b.id, "duplicate slug {}", a.id);
            }
        }
    }

    #[test]
    fn test_catalog_entries_are_complete() {
        for p in projects() {
            assert!(!p.id.is_empty());
            assert!(!p.name.is_empty());
            assert!(p.color.starts_with('#'), "{} color must be a hex value", p.id);
            assert!(p.accent_color.starts_with('#'), "{} accent must be a hex value", p.id);
        }
    }
}
