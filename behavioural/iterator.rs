// Behavioural Pattern: Iterator
// Sequential access to a collection's elements without exposing how the
// collection stores them.

use design_patterns::console;

// ============================================================================
// Explicit cursor with has_next/next, plus std::iter::Iterator
// ============================================================================

struct ArrayIterator<'a, T> {
    collection: &'a [T],
    position: usize,
}

impl<'a, T> ArrayIterator<'a, T> {
    fn new(collection: &'a [T]) -> Self {
        Self {
            collection,
            position: 0,
        }
    }

    fn has_next(&self) -> bool {
        self.position < self.collection.len()
    }
}

impl<'a, T> Iterator for ArrayIterator<'a, T> {
    type Item = &'a T;

    // Past the end this keeps returning None without moving the cursor.
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.collection.get(self.position)?;
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.collection.len() - self.position;
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for ArrayIterator<'_, T> {}


fn main() {
    console::banner("Iterator Pattern (numbers)");
    let numbers = [1, 2, 3, 4, 5, 6];
    let mut iterator = ArrayIterator::new(&numbers);
    println!("has_next: {}", iterator.has_next());
    for _ in 0..3 {
        if let Some(n) = iterator.next() {
            println!("next: {}", n);
        }
    }
    println!("has_next: {} ({} left)", iterator.has_next(), iterator.len());

    println!();
    console::banner("Iterator Pattern (strings)");
    let words = ["Hello", "World"];
    let mut words_iter = ArrayIterator::new(&words);
    println!("has_next: {}", words_iter.has_next());
    while words_iter.has_next() {
        if let Some(word) = words_iter.next() {
            println!("next: {}", word);
        }
    }
    console::step(format!("Past the end: {:?}", words_iter.next()));

    println!();
    console::banner("Same cursor, standard adapters");
    let total: i32 = ArrayIterator::new(&numbers).sum();
    console::outcome(format!("Sum of {:?} = {}", numbers, total));

    console::when_to_use("iterator");
}
