fn main() -> anyhow::Result<()> {
    let resolved = ota_build::run()?;

    if resolved.hw_revision().is_none() {
        println!(
            "cargo:warning=HW_VERSION {} is not numeric, HW_REVISION will be None",
            resolved.hw_version().raw()
        );
    }

    Ok(())
}
