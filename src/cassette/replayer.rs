//! Replays recorded interactions from a cassette.

use std::collections::HashMap;

use super::format::{Cassette, Interaction};

/// Key for indexing interactions by port and method.
#[derive(Debug, Clone, Hash, Eq, PartialEq)]
struct PortMethodKey {
    port: String,
    method: String,
}

/// Replays interactions from a loaded cassette, serving them sequentially
/// per port/method pair.
pub struct CassetteReplayer {
    /// Per port+method queue of interactions (in order).
    queues: HashMap<PortMethodKey, Vec<Interaction>>,
    /// Per port+method cursor tracking position.
    cursors: HashMap<PortMethodKey, usize>,
}

impl CassetteReplayer {
    /// Create a new replayer from a loaded cassette.
    #[must_use]
    pub fn new(cassette: &Cassette) -> Self {
        let mut queues: HashMap<PortMethodKey, Vec<Interaction>> = HashMap::new();
        for interaction in &cassette.interactions {
            let key = PortMethodKey {
                port: interaction.port.clone(),
                method: interaction.method.clone(),
            };
            queues.entry(key).or_default().push(interaction.clone());
        }
        let cursors = queues.keys().map(|k| (k.clone(), 0)).collect();
        Self { queues, cursors }
    }

    /// Return the next interaction for the given port and method.
    ///
    /// # Errors
    ///
    /// Returns a descriptive message when the cassette has no (more)
    /// interactions for the given port/method combination.
    pub fn next_interaction(&mut self, port: &str, method: &str) -> Result<&Interaction, String> {
        let key = PortMethodKey { port: port.to_string(), method: method.to_string() };

        let Some(queue) = self.queues.get(&key) else {
            let mut available: Vec<String> =
                self.queues.keys().map(|k| format!("{}::{}", k.port, k.method)).collect();
            available.sort();
            return Err(format!(
                "Cassette exhausted: no interactions recorded for port={port:?} method={method:?}. \
                 Available port::method pairs: [{}]",
                available.join(", ")
            ));
        };

        let cursor = self.cursors.entry(key).or_insert(0);
        let Some(interaction) = queue.get(*cursor) else {
            return Err(format!(
                "Cassette exhausted: all {count} interactions for port={port:?} method={method:?} \
                 have been consumed. Last interaction was seq={last_seq}.",
                count = queue.len(),
                last_seq = queue.last().map_or(0, |i| i.seq),
            ));
        };
        *cursor += 1;
        Ok(interaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cassette::format::{Cassette, Interaction};
    use chrono::Utc;
    use serde_json::json;

    fn make_cassette(interactions: Vec<Interaction>) -> Cassette {
        Cassette {
            name: "test".into(),
            recorded_at: Utc::now(),
            base_url: "http://127.0.0.1:8000".into(),
            interactions,
        }
    }

    fn interaction(seq: u64, method: &str, output: serde_json::Value) -> Interaction {
        Interaction {
            seq,
            port: "analysis".into(),
            method: method.into(),
            input: json!({}),
            output,
        }
    }

    #[test]
    fn replays_each_method_in_recorded_order() {
        let cassette = make_cassette(vec![
            interaction(0, "analyze", json!({"n": 1})),
            interaction(1, "health", json!({"n": 2})),
            interaction(2, "analyze", json!({"n": 3})),
        ]);

        let mut replayer = CassetteReplayer::new(&cassette);

        assert_eq!(replayer.next_interaction("analysis", "analyze").unwrap().seq, 0);
        assert_eq!(replayer.next_interaction("analysis", "health").unwrap().seq, 1);
        let third = replayer.next_interaction("analysis", "analyze").unwrap();
        assert_eq!(third.seq, 2);
        assert_eq!(third.output, json!({"n": 3}));
    }

    #[test]
    fn exhausted_replayer_reports_descriptive_error() {
        let cassette = make_cassette(vec![interaction(0, "analyze", json!({}))]);

        let mut replayer = CassetteReplayer::new(&cassette);
        assert!(replayer.next_interaction("analysis", "analyze").is_ok());
        let err = replayer.next_interaction("analysis", "analyze").unwrap_err();
        assert!(err.contains("Cassette exhausted"));
        assert!(err.contains("seq=0"));
    }

    #[test]
    fn unknown_method_lists_available_pairs() {
        let cassette = make_cassette(vec![interaction(0, "analyze", json!({}))]);
        let mut replayer = CassetteReplayer::new(&cassette);
        let err = replayer.next_interaction("analysis", "health").unwrap_err();
        assert!(err.contains("no interactions recorded"));
        assert!(err.contains("analysis::analyze"));
    }
}
