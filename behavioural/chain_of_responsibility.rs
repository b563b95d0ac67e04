// Behavioural Pattern: Chain of Responsibility
// A request travels along a chain of handlers. Each handler either answers it
// or forwards it to its successor.

use design_patterns::console;

// ============================================================================
// Handler trait with forwarding built in
// ============================================================================

type Successor = Option<Box<dyn Handler>>;

trait Handler {
    fn successor(&self) -> Option<&dyn Handler>;
    fn successor_slot(&mut self) -> &mut Successor;

    /// Answers the request locally, or returns `None` to let it pass on.
    fn try_handle(&self, request: &str) -> Option<String>;

    /// Installs `next` as the successor and returns it, so links can be
    /// chained: `a.set_next(b).set_next(c)`.
    fn set_next(&mut self, next: Box<dyn Handler>) -> &mut dyn Handler {
        &mut **self.successor_slot().insert(next)
    }

    fn handle(&self, request: &str) -> Option<String> {
        self.try_handle(request)
            .or_else(|| self.successor().and_then(|next| next.handle(request)))
    }
}

// Every concrete handler embeds a link and implements the plumbing the same
// way, so the macro only writes the two accessors.
macro_rules! impl_link {
    () => {
        fn successor(&self) -> Option<&dyn Handler> {
            self.next.as_deref()
        }

        fn successor_slot(&mut self) -> &mut Successor {
            &mut self.next
        }
    };
}

// ============================================================================
// Concrete handlers
// ============================================================================

#[derive(Default)]
struct MonkeyHandler {
    next: Successor,
}

impl Handler for MonkeyHandler {
    impl_link!();

    fn try_handle(&self, request: &str) -> Option<String> {
        (request == "Banana").then(|| format!("Monkey: I'll eat the {}", request))
    }
}

#[derive(Default)]
struct SquirrelHandler {
    next: Successor,
}

impl Handler for SquirrelHandler {
    impl_link!();

    fn try_handle(&self, request: &str) -> Option<String> {
        (request == "Nut").then(|| format!("Squirrel: I'll eat the {}", request))
    }
}

#[derive(Default)]
struct DogHandler {
    next: Successor,
}

impl Handler for DogHandler {
    impl_link!();

    fn try_handle(&self, request: &str) -> Option<String> {
        (request == "MeatBall").then(|| format!("Dog: I'll eat the {}", request))
    }
}

// ============================================================================
// Client code
// ============================================================================

fn serve(handler: &dyn Handler, foods: &[&str]) -> Vec<String> {
    let mut transcript = Vec::new();
    for food in foods {
        transcript.push(format!("Who wants to eat {}?", food));
        match handler.handle(food) {
            Some(answer) => transcript.push(answer),
            None => transcript.push(format!("{} was left untouched", food)),
        }
    }
    transcript
}

fn build_chain() -> MonkeyHandler {
    let mut monkey = MonkeyHandler::default();
    monkey
        .set_next(Box::new(SquirrelHandler::default()))
        .set_next(Box::new(DogHandler::default()));
    monkey
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banana_goes_to_monkey() {
        let chain = build_chain();
        assert_eq!(
            chain.handle("Banana").as_deref(),
            Some("Monkey: I'll eat the Banana")
        );
    }

    #[test]
    fn test_banana_answer_independent_of_order() {
        let mut squirrel = SquirrelHandler::default();
        squirrel
            .set_next(Box::new(DogHandler::default()))
            .set_next(Box::new(MonkeyHandler::default()));

        assert_eq!(
            squirrel.handle("Banana").as_deref(),
            Some("Monkey: I'll eat the Banana")
        );
    }

    #[test]
    fn test_request_forwarded_to_tail() {
        let chain = build_chain();
        assert_eq!(
            chain.handle("MeatBall").as_deref(),
            Some("Dog: I'll eat the MeatBall")
        );
        assert_eq!(chain.handle("Nut").as_deref(), Some("Squirrel: I'll eat the Nut"));
    }

    #[test]
    fn test_unmatched_request_is_unhandled() {
        let chain = build_chain();
        assert_eq!(chain.handle("Cup Of Coffee"), None);
    }

    #[test]
    fn test_handler_without_successor() {
        let dog = DogHandler::default();
        assert!(dog.successor().is_none());
        assert_eq!(dog.handle("Banana"), None);
    }

    #[test]
    fn test_handler_behind_tail_is_unreachable() {
        // Monkey is not part of this chain.
        let mut squirrel = SquirrelHandler::default();
        squirrel.set_next(Box::new(DogHandler::default()));
        assert_eq!(squirrel.handle("Banana"), None);
    }

    #[test]
    fn test_set_next_replaces_successor() {
        let mut monkey = MonkeyHandler::default();
        monkey.set_next(Box::new(DogHandler::default()));
        monkey.set_next(Box::new(SquirrelHandler::default()));

        assert!(monkey.handle("MeatBall").is_none());
        assert!(monkey.handle("Nut").is_some());
    }

    #[test]
    fn test_serve_transcript() {
        let chain = build_chain();
        let transcript = serve(&chain, &["Nut", "Cup Of Coffee"]);
        assert_eq!(
            transcript,
            vec![
                "Who wants to eat Nut?",
                "Squirrel: I'll eat the Nut",
                "Who wants to eat Cup Of Coffee?",
                "Cup Of Coffee was left untouched",
            ]
        );
    }
}

fn main() {
    console::banner("Chain of Responsibility");

    let chain = build_chain();
    let foods = ["Nut", "Banana", "Cup Of Coffee", "MeatBall"];

    for line in serve(&chain, &foods) {
        if line.starts_with("Who wants") {
            console::step(line);
        } else if line.ends_with("untouched") {
            console::warn(line);
        } else {
            console::outcome(line);
        }
    }

    console::when_to_use("chain-of-responsibility");
}
