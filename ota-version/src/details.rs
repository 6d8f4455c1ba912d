use core::fmt::Write as _;

use embedded_io_async::Write;
use heapless::String;

use crate::check::MacAddress;

const SEPARATOR: &str = "------------------------\r\n";
const LINE_LEN: usize = 96;

// two separators and four lines
type Block = String<{ 2 * SEPARATOR.len() + 4 * LINE_LEN }>;

#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[derive(Debug)]
pub enum DetailsError<WriteError> {
    LineTooLong,
    WriteError(WriteError),
}

fn push_line<E>(block: &mut Block, args: core::fmt::Arguments<'_>) -> Result<(), DetailsError<E>> {
    let mut line: String<LINE_LEN> = String::new();
    line.write_fmt(args).map_err(|_| DetailsError::LineTooLong)?;
    line.push_str("\r\n").map_err(|_| DetailsError::LineTooLong)?;
    block.push_str(&line).map_err(|_| DetailsError::LineTooLong)
}

/// Print the block the device shows at boot and after each update check.
/// Nothing is written unless every line fits.
pub async fn write_details<W: Write>(
    out: &mut W,
    mac: MacAddress,
    latest_release: Option<&str>,
) -> Result<(), DetailsError<W::Error>> {
    let mut block = Block::new();
    block.push_str(SEPARATOR).map_err(|_| DetailsError::LineTooLong)?;
    push_line(&mut block, format_args!("Device MAC: {}", mac))?;
    push_line(&mut block, format_args!("Firmware Version (OTA_VERSION): {}", crate::OTA_VERSION))?;
    push_line(&mut block, format_args!("Hardware Version (HW_VERSION): {}", crate::HW_VERSION))?;
    if let Some(tag) = latest_release {
        push_line(&mut block, format_args!("Latest Release (Server): {}", tag))?;
    }
    block.push_str(SEPARATOR).map_err(|_| DetailsError::LineTooLong)?;

    out.write_all(block.as_bytes())
        .await
        .map_err(DetailsError::WriteError)?;
    out.flush().await.map_err(DetailsError::WriteError)
}

#[cfg(feature = "defmt")]
pub fn log_details(mac: MacAddress, latest_release: Option<&str>) {
    defmt::info!("Device MAC: {}", mac);
    defmt::info!("Firmware Version (OTA_VERSION): {}", crate::OTA_VERSION);
    defmt::info!("Hardware Version (HW_VERSION): {}", crate::HW_VERSION);
    if let Some(tag) = latest_release {
        defmt::info!("Latest Release (Server): {}", tag);
    }
}
