use flexi_logger::{DeferredNow, style};
use log::Record;

/// `HH:MM:SS LEVEL message`, level colored.
pub fn cli_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    let level = record.level();
    write!(
        w,
        "{} {} {}",
        now.format("%H:%M:%S"),
        style(level).paint(format!("{level:<5}")),
        record.args()
    )
}
