use std::io::Read;

use qrdata::{QrContent, encode, validate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let content: QrContent = serde_json::from_str(&input)?;
    for error in validate(&content).errors() {
        eprintln!("warning: {error}");
    }

    println!("{}", encode(&content));

    Ok(())
}
