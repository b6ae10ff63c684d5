use sha2::{Digest, Sha256};
use super::Namer;

const ADJECTIVES: [&str; 64] = [
    "able", "agile", "amber", "ancient", "brave", "bright", "brisk", "calm",
    "candid", "clever", "cosmic", "crisp", "curious", "daring", "eager", "electric",
    "elegant", "fancy", "fearless", "fierce", "gentle", "giant", "glad", "golden",
    "graceful", "happy", "hidden", "honest", "humble", "jolly", "keen", "kind",
    "lively", "lucky", "mellow", "mighty", "misty", "modest", "noble", "odd",
    "patient", "plucky", "polite", "proud", "quick", "quiet", "rapid", "rustic",
    "shy", "silent", "silver", "sleepy", "snowy", "solid", "steady", "stormy",
    "sunny", "swift", "tidy", "tranquil", "vivid", "wandering", "witty", "zealous",
];

const ANIMALS: [&str; 64] = [
    "aardvark", "albatross", "alpaca", "badger", "beaver", "beetle", "bison", "bobcat",
    "buffalo", "camel", "caribou", "cheetah", "cobra", "coyote", "crane", "dingo",
    "dolphin", "eagle", "falcon", "ferret", "finch", "gazelle", "gecko", "gibbon",
    "giraffe", "heron", "hyena", "ibex", "iguana", "jackal", "jaguar", "koala",
    "lemur", "leopard", "llama", "lynx", "macaw", "marmot", "meerkat", "mongoose",
    "moose", "narwhal", "ocelot", "otter", "owl", "panda", "pelican", "penguin",
    "puffin", "quokka", "raccoon", "raven", "salmon", "seal", "sloth", "stork",
    "tapir", "tiger", "toucan", "turtle", "walrus", "weasel", "wombat", "zebra",
];

/// Deterministic `adjective-animal-adjective-animal` names from a SHA-256
/// digest of the input.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordNamer;

impl Namer for WordNamer {
    fn name(&self, bytes: &[u8]) -> String {
        let digest = Sha256::digest(bytes);
        let pick = |i: usize, words: &[&'static str; 64]| words[digest[i] as usize % words.len()];
        format!(
            "{}-{}-{}-{}",
            pick(0, &ADJECTIVES),
            pick(1, &ANIMALS),
            pick(2, &ADJECTIVES),
            pick(3, &ANIMALS)
        )
    }
}
