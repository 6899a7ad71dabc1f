use crate::documents::GameEntry;

/// Neighboring queue positions of a game inside an ordered recommendation
/// list. Either side is absent at the corresponding list boundary.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Neighbors {
    pub prev: Option<String>,
    pub next: Option<String>,
}

/// Resolves the previous/next appids around `current` in the ordered list.
///
/// An appid missing from the list resolves to no neighbors instead of an
/// error. The view degrades to a dead end with no navigation offered.
pub fn resolve(games: &[GameEntry], current: &str) -> Neighbors {
    match games.iter().position(|game| game.appid == current) {
        Some(i) => Neighbors {
            prev: match i > 0 {
                true => Some(games[i - 1].appid.clone()),
                false => None,
            },
            next: games.get(i + 1).map(|game| game.appid.clone()),
        },
        None => Neighbors::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(appid: &str) -> GameEntry {
        GameEntry {
            appid: appid.to_owned(),
            ..Default::default()
        }
    }

    fn queue() -> Vec<GameEntry> {
        vec![game("10"), game("20"), game("30")]
    }

    #[test]
    fn middle_of_queue_has_both_neighbors() {
        assert_eq!(
            resolve(&queue(), "20"),
            Neighbors {
                prev: Some("10".to_owned()),
                next: Some("30".to_owned()),
            }
        );
    }

    #[test]
    fn head_of_queue_has_no_previous() {
        assert_eq!(
            resolve(&queue(), "10"),
            Neighbors {
                prev: None,
                next: Some("20".to_owned()),
            }
        );
    }

    #[test]
    fn tail_of_queue_has_no_next() {
        assert_eq!(
            resolve(&queue(), "30"),
            Neighbors {
                prev: Some("20".to_owned()),
                next: None,
            }
        );
    }

    #[test]
    fn unknown_appid_is_a_dead_end() {
        assert_eq!(resolve(&queue(), "40"), Neighbors::default());
    }

    #[test]
    fn empty_queue_is_a_dead_end() {
        assert_eq!(resolve(&[], "10"), Neighbors::default());
    }

    #[test]
    fn single_entry_queue_has_no_neighbors() {
        assert_eq!(resolve(&[game("10")], "10"), Neighbors::default());
    }

    #[test]
    fn resolve_is_idempotent() {
        let games = queue();
        assert_eq!(resolve(&games, "20"), resolve(&games, "20"));
    }
}
