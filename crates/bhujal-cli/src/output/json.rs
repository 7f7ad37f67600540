use bhujal_core::error::BhujalError;
use serde::Serialize;

pub fn print<T: Serialize + ?Sized>(value: &T) -> Result<(), BhujalError> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{json}");
    Ok(())
}
