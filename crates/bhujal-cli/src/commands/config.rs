use bhujal_core::config::builtin;
use bhujal_core::error::BhujalError;
use std::path::Path;

pub fn list() -> Result<(), BhujalError> {
    println!("Available predefined extraction configs:\n");
    for name in builtin::PRESETS {
        let config = builtin::load_preset(name)?;
        println!(
            "  {:<8} {} / {} ({}), pages {}-{}",
            name,
            config.district,
            config.parameter,
            config.unit,
            config.pages.start + 1,
            config.pages.end + 1
        );
        let periods: Vec<&str> = config.timestamps.iter().map(|t| t.label.as_str()).collect();
        println!("           columns: {}", periods.join(", "));
        println!();
    }
    Ok(())
}

pub fn show(preset: &str) -> Result<(), BhujalError> {
    let config = builtin::load_preset(preset)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}

pub fn validate(path: &Path) -> Result<(), BhujalError> {
    let config = bhujal_core::config::load_config(path)?;
    println!(
        "Valid config: {} / {}, {} reporting period(s), pages {}-{}",
        config.district,
        config.parameter,
        config.timestamps.len(),
        config.pages.start + 1,
        config.pages.end + 1
    );
    Ok(())
}
