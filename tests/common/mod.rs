use std::fs::File;
use std::io::Error;
use std::path::Path;

/// Writes a seed CSV with `rows` users `user-1..=user-rows` in `tenant`.
#[allow(dead_code)]
pub fn generate_users_csv(path: &Path, tenant: &str, rows: usize) -> Result<(), Error> {
    let file = File::create(path)?;
    let mut wtr = csv::WriterBuilder::new().from_writer(file);

    wtr.write_record(["tenant", "type", "key", "id", "attributes"])?;

    for i in 1..=rows {
        wtr.write_record([
            tenant,
            "User",
            "user_id",
            &format!("user-{}", i),
            &format!("{{\"seq\": {}}}", i),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Writes arbitrary rows under the standard seed header.
#[allow(dead_code)]
pub fn write_rows(path: &Path, rows: &[[&str; 5]]) -> Result<(), Error> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(["tenant", "type", "key", "id", "attributes"])?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
