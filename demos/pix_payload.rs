use std::io;

use qrdata::{PixPayment, QrContent, encode, validate};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let key = std::env::var("QRDATA_PIX_KEY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "QRDATA_PIX_KEY environment variable is required",
        )
    })?;
    let name = std::env::var("QRDATA_PIX_NAME").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "QRDATA_PIX_NAME environment variable is required",
        )
    })?;
    let city = std::env::var("QRDATA_PIX_CITY").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "QRDATA_PIX_CITY environment variable is required",
        )
    })?;
    let amount = std::env::var("QRDATA_PIX_AMOUNT").unwrap_or_default();
    let transaction_id = std::env::var("QRDATA_PIX_TXID").unwrap_or_default();

    let content = QrContent::Pix(PixPayment {
        key,
        merchant_name: name,
        merchant_city: city,
        amount,
        transaction_id,
    });

    for error in validate(&content).errors() {
        eprintln!("warning: {error}");
    }

    let payload = encode(&content);
    if payload.is_empty() {
        eprintln!("nothing to encode: key, name, and city are required");
        return Ok(());
    }
    println!("{payload}");

    Ok(())
}
