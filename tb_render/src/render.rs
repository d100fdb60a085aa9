//! Text and JSON rendering of resolved tiers.

use tourney_bracket::{BracketError, BracketSnapshot, Tiers};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

/// Render tiers as an indented outline, final first
pub fn render_text(snapshot: &BracketSnapshot, tiers: &Tiers<'_>) -> String {
    let mut out = String::new();

    if let Some(tournament) = &snapshot.tournament {
        out.push_str(&format!("{tournament}\n"));
    }

    for (label, level) in tiers.labelled() {
        out.push_str(&format!("{label}\n"));
        for m in level {
            out.push_str(&format!("  [{}] {}", m.id, m.description));
            if !m.teams.is_empty() {
                let teams: Vec<String> = m.teams.iter().map(ToString::to_string).collect();
                out.push_str(&format!(" (teams: {})", teams.join(", ")));
            }
            out.push('\n');
        }
    }

    out
}

/// Render tiers as a JSON document of labelled levels
pub fn render_json(tiers: &Tiers<'_>) -> Result<String, serde_json::Error> {
    let levels: Vec<serde_json::Value> = tiers
        .labelled()
        .map(|(label, level)| serde_json::json!({ "round": label, "matches": level }))
        .collect();

    serde_json::to_string_pretty(&levels)
}

/// User-facing message for a resolution failure
pub fn user_message(err: &BracketError) -> String {
    if err.is_not_built() {
        "Bracket has not been created yet".to_string()
    } else {
        format!("Bracket data is corrupted: {err}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tourney_bracket::{MalformedReason, Match, ResolverConfig, Tournament};

    fn snapshot() -> BracketSnapshot {
        BracketSnapshot::new(
            Some(Tournament::new(1, "WGF 2011", "Smash")),
            vec![
                Match::new(1, "Final"),
                Match::new(2, "Semi A")
                    .with_winner_parent(1)
                    .with_teams(vec![4, 5]),
                Match::new(3, "Semi B").with_winner_parent(1),
            ],
        )
    }

    #[test]
    fn test_render_text() {
        let snapshot = snapshot();
        let tiers = snapshot.resolve(ResolverConfig::default()).unwrap();

        let text = render_text(&snapshot, &tiers);
        assert_eq!(
            text,
            "WGF 2011 Smash\n\
             Final\n  [1] Final\n\
             Semi Final\n  [2] Semi A (teams: 4, 5)\n  [3] Semi B\n"
        );
    }

    #[test]
    fn test_render_json() {
        let snapshot = snapshot();
        let tiers = snapshot.resolve(ResolverConfig::default()).unwrap();

        let json: serde_json::Value = serde_json::from_str(&render_json(&tiers).unwrap()).unwrap();
        assert_eq!(json[0]["round"], "Final");
        assert_eq!(json[1]["round"], "Semi Final");
        assert_eq!(json[1]["matches"][1]["id"], 3);
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            user_message(&BracketError::NoRoot),
            "Bracket has not been created yet"
        );

        let msg = user_message(&BracketError::TourneyMalformed(MalformedReason::Cycle(4)));
        assert!(msg.starts_with("Bracket data is corrupted"));
        assert!(msg.contains("match 4"));
    }
}
