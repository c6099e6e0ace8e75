use tourbook::render::{render_average, render_tree};
use tourbook::{ByPassportCode, BySurname, OrderedTree, RecordResult, Tourist};

fn main() -> RecordResult<()> {
    let mut by_surname = OrderedTree::new(BySurname);
    by_surname.insert(Tourist::new("Smith", 1, 5)?);
    by_surname.insert(Tourist::new("Doe", 2, 3)?);
    by_surname.insert(Tourist::new("Lee", 3, 10)?);

    println!("By surname:\n{}", render_tree(&by_surname));
    println!("{}", render_average(&by_surname));

    let mut by_passport = OrderedTree::new(ByPassportCode);
    by_passport.extend(by_surname.drain_and_clear());
    println!("\nBy passport code:\n{}", render_tree(&by_passport));

    // Any projection works as a key.
    let mut by_days = OrderedTree::by_key(|t: &Tourist| t.days);
    by_days.extend(by_passport.drain_and_clear());
    let days: Vec<u32> = by_days.iter().map(|t| t.days).collect();
    println!("\nStays in ascending order: {:?}", days);
    Ok(())
}
