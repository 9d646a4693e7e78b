//! Token vocabulary
//!
//! How a vocabulary is stored on disk is up to the tokenizer that produced it;
//! this type is built from an ordered token list and answers id lookups, most
//! importantly the padding id used to mask the loss.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Padding token
pub const PAD_WORD: &str = "<pad>";
/// Out-of-vocabulary token
pub const UNK_WORD: &str = "<unk>";

/// Token to id mapping
#[derive(Clone, Debug, Default)]
pub struct Vocabulary {
    token_to_id: HashMap<String, u32>,
    id_to_token: Vec<String>,
}

impl Vocabulary {
    /// Build from tokens in id order, keeping at most `max_size` distinct entries
    ///
    /// Duplicates keep their first id.
    pub fn from_tokens<I, S>(tokens: I, max_size: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut vocab = Self::default();
        for token in tokens {
            if vocab.id_to_token.len() >= max_size {
                break;
            }
            let token = token.into();
            if vocab.token_to_id.contains_key(&token) {
                continue;
            }
            let id = vocab.id_to_token.len() as u32;
            vocab.token_to_id.insert(token.clone(), id);
            vocab.id_to_token.push(token);
        }
        vocab
    }

    /// Id of a token
    pub fn id(&self, token: &str) -> Option<u32> {
        self.token_to_id.get(token).copied()
    }

    /// Token for an id
    pub fn token(&self, id: u32) -> Option<&str> {
        self.id_to_token.get(id as usize).map(String::as_str)
    }

    /// Id of [`PAD_WORD`]; loss over these positions is ignored
    pub fn pad_id(&self) -> Result<u32> {
        self.id(PAD_WORD)
            .ok_or_else(|| Error::Config(format!("vocabulary has no {PAD_WORD} token")))
    }

    /// Id of a token, falling back to [`UNK_WORD`]
    pub fn id_or_unk(&self, token: &str) -> Option<u32> {
        self.id(token).or_else(|| self.id(UNK_WORD))
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.id_to_token.len()
    }

    /// True when empty
    pub fn is_empty(&self) -> bool {
        self.id_to_token.is_empty()
    }
}
