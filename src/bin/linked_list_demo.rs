//! Narrated demonstration of the singly linked list.
//!
//! Run with: cargo run --bin linked_list_demo

use colored::Colorize;
use linked_list_lab::{LinkedList, ListError};

fn print_section(title: &str) {
    println!("\n{}", "=".repeat(50));
    println!("{}", title.bold().cyan());
    println!("{}", "=".repeat(50));
}

fn print_step(label: &str) {
    println!("\n{}", format!("||====> {} <====||", label).yellow());
}

fn show(list: &LinkedList) {
    println!("Linked List: {}", list);
    println!("Size: {} nodes", list.len());
}

fn report(result: Result<(), ListError>, success: &str) {
    match result {
        Ok(()) => println!("{} {}", "✓".green(), success),
        Err(e) => println!("{} {}", "✗ Error caught:".red(), e),
    }
}

fn basic_operations() {
    print_section("TEST CASE 1: Basic Insert and Delete Operations");

    let mut list = LinkedList::new();

    print_step("Inserting elements");
    for value in [10, 20, 30] {
        list.insert_back(value);
        println!("{} Inserted {} at the end.", "✓".green(), value);
    }
    show(&list);

    print_step("Insert at beginning");
    list.insert_front(5);
    println!("{} Inserted 5 at the beginning.", "✓".green());
    show(&list);

    print_step("Insert at middle (position 2)");
    report(list.insert_at(15, 2), "Inserted 15 at position 2.");
    show(&list);

    print_step("Delete by position (position 3)");
    match list.delete_at(3) {
        Ok(value) => println!("{} Deleted node with value {} from position 3.", "✓".green(), value),
        Err(e) => println!("{} {}", "✗ Error caught:".red(), e),
    }
    show(&list);

    print_step("Delete by value (value 15)");
    report(list.delete_by_value(15), "Deleted node with value 15.");
    show(&list);
}

fn edge_cases() {
    print_section("TEST CASE 2: Edge Cases and Error Handling");

    let mut list = LinkedList::new();

    print_step("Attempting to delete from empty list");
    match list.delete_at(0) {
        Ok(value) => println!("Deleted {}", value),
        Err(e) => println!("{} {}", "✗ Error caught:".red(), e),
    }

    print_step("Insert into empty list");
    list.insert_front(100);
    println!("{} Inserted 100 at the beginning.", "✓".green());
    show(&list);

    print_step("Attempting invalid position insertion");
    report(list.insert_at(200, 5), "Inserted 200 at position 5.");

    print_step("Valid insertion at position 1");
    report(list.insert_at(150, 1), "Inserted 150 at position 1.");
    show(&list);

    print_step("Attempting to delete non-existent value");
    report(list.delete_by_value(999), "Deleted node with value 999.");

    print_step("Delete all elements");
    for _ in 0..2 {
        match list.delete_at(0) {
            Ok(value) => println!("{} Deleted node with value {} from position 0.", "✓".green(), value),
            Err(e) => println!("{} {}", "✗ Error caught:".red(), e),
        }
    }
    show(&list);
}

fn larger_list() {
    print_section("TEST CASE 3: Operations on Larger List");

    let mut list = LinkedList::new();

    print_step("Building list with values 2, 4, 6, 8, 10, 12");
    for value in (2..=12).step_by(2) {
        list.insert_back(value);
    }
    show(&list);

    print_step("Insert 1 at beginning");
    list.insert_front(1);
    show(&list);

    print_step("Insert 7 at position 4");
    report(list.insert_at(7, 4), "Inserted 7 at position 4.");
    show(&list);

    print_step("Insert 14 at end");
    list.insert_back(14);
    show(&list);

    print_step("Delete values 1, 7, and 14");
    for value in [1, 7, 14] {
        report(list.delete_by_value(value), &format!("Deleted node with value {}.", value));
    }
    show(&list);

    print_step("Delete positions 0 and 2");
    for position in [0, 2] {
        match list.delete_at(position) {
            Ok(value) => println!(
                "{} Deleted node with value {} from position {}.",
                "✓".green(),
                value,
                position
            ),
            Err(e) => println!("{} {}", "✗ Error caught:".red(), e),
        }
    }
    show(&list);
}

fn main() {
    println!("{}", "||=============================================||".bold());
    println!("{}", "||   SINGLY LINKED LIST IMPLEMENTATION IN RUST ||".bold());
    println!("{}", "||=============================================||".bold());

    basic_operations();
    edge_cases();
    larger_list();

    print_section("ALL TESTS COMPLETED SUCCESSFULLY");
}
