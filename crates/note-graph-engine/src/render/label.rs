use sha2::{Digest, Sha512};

/// Characters kept as-is when anonymising, so labels keep their shape.
const KEPT: [char; 3] = [' ', '#', '/'];

const ELLIPSIS: char = '…';

/// Turns tag texts, note titles and note ids into DOT-safe strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Labeler {
    /// Labels longer than this many characters are cut and get an ellipsis.
    pub max_label_length: usize,
    pub anonymise: bool,
}

impl Default for Labeler {
    fn default() -> Self {
        Self {
            max_label_length: 20,
            anonymise: false,
        }
    }
}

impl Labeler {
    pub fn label(&self, text: &str) -> String {
        let shortened = self.truncate(text);
        if self.anonymise {
            hashed(&shortened)
        } else {
            escape(&shortened)
        }
    }

    /// Node identifier for a note; never truncated.
    pub fn node_id(&self, id: &str) -> String {
        if self.anonymise {
            hashed(id)
        } else {
            escape(id)
        }
    }

    fn truncate(&self, text: &str) -> String {
        match text.char_indices().nth(self.max_label_length) {
            Some((cut, _)) => {
                let mut shortened = text[..cut].to_string();
                shortened.push(ELLIPSIS);
                shortened
            }
            None => text.to_string(),
        }
    }
}

fn escape(text: &str) -> String {
    text.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Replaces every character outside [`KEPT`] by cycling through the hex
/// SHA-512 digest of `text`.
fn hashed(text: &str) -> String {
    let mut hasher = Sha512::new();
    hasher.update(text.as_bytes());
    let digest = format!("{:x}", hasher.finalize());
    let mut hex = digest.chars().cycle();

    text.chars()
        .map(|c| {
            if KEPT.contains(&c) {
                c
            } else {
                hex.next().unwrap_or(c)
            }
        })
        .collect()
}
