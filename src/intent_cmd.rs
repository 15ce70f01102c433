//! `botadmin intent`: classify a message from the command line.
//!
//! Debug harness for the router: prints the label, or with `--json` the
//! full match including the deciding phrase.

use anyhow::Result;

use chatbot_admin_core::intent::IntentRouter;

pub fn run_intent(router: &IntentRouter, message: &str, json: bool) -> Result<()> {
    let result = router.classify(message);

    if json {
        println!("{}", serde_json::to_string(&result)?);
    } else {
        match &result.matched_phrase {
            Some(phrase) => println!("{}  (matched \"{}\")", result.intent, phrase),
            None => println!("{}", result.intent),
        }
    }

    Ok(())
}
