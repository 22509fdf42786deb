use std::cmp::Ordering;

// =============================================================================
// Problem 1: Factorial
// =============================================================================

/// Recursive factorial.
///
/// Base case: `0! = 1! = 1`. Recursive case: `n! = n * (n-1)!`.
/// `u64` holds every factorial up to `20!`.
pub fn factorial(n: u32) -> u64 {
    if n <= 1 {
        return 1;
    }
    u64::from(n) * factorial(n - 1)
}

// =============================================================================
// Problem 2: Fibonacci
// =============================================================================

/// Naive doubly-recursive Fibonacci.
///
/// Base cases: `fib(0) = 0`, `fib(1) = 1`. Recursive case:
/// `fib(n) = fib(n-1) + fib(n-2)`. Exponential on purpose: the point of the
/// demo is the recursion tree, not speed.
pub fn fibonacci(n: u32) -> u64 {
    match n {
        0 => 0,
        1 => 1,
        _ => fibonacci(n - 1) + fibonacci(n - 2),
    }
}

/// The first `n` Fibonacci numbers.
pub fn fibonacci_sequence(n: usize) -> Vec<u64> {
    (0..n).map(|i| fibonacci(i as u32)).collect()
}

// =============================================================================
// Problem 3: String reversal
// =============================================================================

/// Recursive string reversal: last char + reverse of the rest.
///
/// Base case: empty or single-char input returns itself. Recurses over
/// `char`s so multibyte input never splits a UTF-8 boundary.
pub fn reverse_string(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next_back() {
        None => String::new(),
        Some(last) => {
            let mut out = String::with_capacity(s.len());
            out.push(last);
            out.push_str(&reverse_string(chars.as_str()));
            out
        }
    }
}

// =============================================================================
// Problem 4: Binary search
// =============================================================================

/// Recursive binary search over a sorted slice.
///
/// Base cases: empty search space (`None`) or a hit at the midpoint.
/// Otherwise recurse into the half that can still contain `target`,
/// re-offsetting the index on the right half.
pub fn binary_search(arr: &[i32], target: i32) -> Option<usize> {
    if arr.is_empty() {
        return None;
    }
    let mid = arr.len() / 2;
    match target.cmp(&arr[mid]) {
        Ordering::Equal => Some(mid),
        Ordering::Less => binary_search(&arr[..mid], target),
        Ordering::Greater => binary_search(&arr[mid + 1..], target).map(|i| mid + 1 + i),
    }
}

// =============================================================================
// Tests
// =============================================================================
