use argbind::{Binding, Destination};

fn main() {
    let mut left: i64 = 0;
    let mut right: i64 = 0;
    let mut negate: bool = false;
    let binder = match Destination::new()
        .add(Binding::field(&mut left, "left"))
        .add(Binding::field(&mut right, "right"))
        .add(Binding::field(&mut negate, "n"))
        .build()
    {
        Ok(binder) => binder,
        Err(error) => {
            eprintln!("{error}");
            std::process::exit(1);
        }
    };

    if let Err(error) = binder.parse() {
        eprintln!("{error}");
        std::process::exit(1);
    }

    let sum = left.saturating_add(right);
    println!("Sum: {}", if negate { sum.saturating_neg() } else { sum });
}
