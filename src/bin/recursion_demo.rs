//! Narrated demonstration of four classic recursive algorithms.
//!
//! Run with: cargo run --bin recursion_demo

use colored::Colorize;
use linked_list_lab::recursion::{
    binary_search, factorial, fibonacci, fibonacci_sequence, reverse_string,
};

fn print_header(title: &str) {
    println!("\n{}", "=".repeat(35));
    println!("{}", title.bold().cyan());
    println!("{}", "=".repeat(35));
}

fn print_sub_header(title: &str) {
    println!("\n{}", format!("--- {} ---", title).yellow());
}

fn demo_factorial() {
    print_header("PROBLEM 1: FACTORIAL CALCULATION");

    println!("\nRecursive Logic:");
    println!("  Base Case: factorial(0) = 1, factorial(1) = 1");
    println!("  Recursive Case: factorial(n) = n * factorial(n-1)");
    println!("  Example: 5! = 5 * 4! = 5 * 4 * 3 * 2 * 1 = 120");

    println!("\n{:<15}{:<25}", "Input (n)", "Factorial (n!)");
    println!("{}", "-".repeat(40));
    for n in [0, 1, 5, 10, 15, 20] {
        println!("{:<15}{:<25}", n, factorial(n));
    }

    print_sub_header("Edge Cases");
    println!("Factorial of 0: {} (base case)", factorial(0));
    println!("Factorial of 1: {} (base case)", factorial(1));
    println!("Factorial of 20: {} (largest fitting in u64)", factorial(20));
}

fn demo_fibonacci() {
    print_header("PROBLEM 2: FIBONACCI SEQUENCE");

    println!("\nRecursive Logic:");
    println!("  Base Case: fib(0) = 0, fib(1) = 1");
    println!("  Recursive Case: fib(n) = fib(n-1) + fib(n-2)");
    println!("  Example: fib(5) = fib(4) + fib(3) = 3 + 2 = 5");

    for n in [0usize, 1, 5, 10, 15] {
        print_sub_header(&format!("First {} Fibonacci numbers", n));
        if n == 0 {
            println!("Empty sequence (edge case)");
            continue;
        }
        let sequence = fibonacci_sequence(n);
        let rendered: Vec<String> = sequence.iter().map(u64::to_string).collect();
        println!("Sequence: {}", rendered.join(", "));
    }

    print_sub_header("Edge Cases");
    println!("fib(0): {} (first base case)", fibonacci(0));
    println!("fib(1): {} (second base case)", fibonacci(1));
    println!("fib(2): {} (first recursive call)", fibonacci(2));
}

fn demo_string_reversal() {
    print_header("PROBLEM 3: STRING REVERSAL");

    println!("\nRecursive Logic:");
    println!("  Base Case: String of length 0 or 1 returns itself");
    println!("  Recursive Case: last_char + reverse(remaining_string)");
    println!("  Example: reverse(\"hello\") = 'o' + reverse(\"hell\") = \"olleh\"");

    let inputs = [
        "",
        "a",
        "ab",
        "hello",
        "recursion",
        "A man a plan a canal Panama",
    ];

    println!("\n{:<35}{:<35}", "Original String", "Reversed String");
    println!("{}", "-".repeat(70));
    for input in inputs {
        let reversed = reverse_string(input);
        let shown_input = if input.is_empty() { "(empty)" } else { input };
        let shown_reversed = if reversed.is_empty() {
            "(empty)"
        } else {
            reversed.as_str()
        };
        println!("{:<35}{:<35}", shown_input, shown_reversed);
    }

    print_sub_header("Edge Cases");
    println!("Empty string: \"{}\" (base case)", reverse_string(""));
    println!("Single character: \"{}\" (base case)", reverse_string("x"));
    println!("Two characters: \"{}\" (first recursion)", reverse_string("ab"));
}

fn demo_binary_search() {
    print_header("PROBLEM 4: BINARY SEARCH (RECURSIVE)");

    println!("\nRecursive Logic:");
    println!("  Base Case 1: empty search space -> not found");
    println!("  Base Case 2: arr[mid] == target -> found at mid");
    println!("  Recursive Case 1: target < arr[mid] -> search left half");
    println!("  Recursive Case 2: target > arr[mid] -> search right half");

    let cases: [(&str, &[i32], &[i32]); 3] = [
        (
            "Normal Array [1, 3, 5, 7, 9, 11, 13, 15]",
            &[1, 3, 5, 7, 9, 11, 13, 15],
            &[7, 1, 15, 10],
        ),
        ("Single Element Array [42]", &[42], &[42, 10]),
        ("Empty Array []", &[], &[5]),
    ];

    for (index, (label, array, targets)) in cases.iter().enumerate() {
        print_sub_header(&format!("Test Case {}: {}", index + 1, label));
        println!("Array: {:?}\n", array);
        for &target in *targets {
            match binary_search(array, target) {
                Some(position) => println!(
                    "Searching for {}: {} at index {}",
                    target,
                    "Found".green(),
                    position
                ),
                None => println!("Searching for {}: {}", target, "Not found".red()),
            }
        }
    }
}

fn main() {
    println!("{}", "||=============================================||".bold());
    println!("{}", "||   CLASSIC RECURSIVE ALGORITHMS IN RUST      ||".bold());
    println!("{}", "||=============================================||".bold());

    demo_factorial();
    demo_fibonacci();
    demo_string_reversal();
    demo_binary_search();

    print_header("ALL DEMONSTRATIONS COMPLETED");
}
