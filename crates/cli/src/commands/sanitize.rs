//! `speechintent sanitize` — Show what the relay would return for a raw reply.

use speechintent_agent::sanitize_reply;

pub fn run(text: &str) {
    println!("{}", sanitize_reply(text));
}
