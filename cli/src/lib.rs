//! Command-line front end for the line-screen halftone engine.

pub mod config;
pub mod run;

/// Candidate `.env` locations, tried in order.
const DOTENV_CANDIDATES: [&str; 2] = [".env", "../.env"];

/// Load .env from the first candidate path that exists and return that path.
/// The caller logs it once tracing is up.
pub fn load_dotenv() -> Option<&'static str> {
    load_first_dotenv(&DOTENV_CANDIDATES)
}

fn load_first_dotenv<'a>(candidates: &[&'a str]) -> Option<&'a str> {
    candidates
        .iter()
        .copied()
        .find(|path| dotenvy::from_filename(path).is_ok())
}

/// Size the global rayon pool. `0` keeps rayon's default of one thread per core.
pub fn init_thread_pool(jobs: usize) -> Result<(), anyhow::Error> {
    if jobs > 1 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()?;
        tracing::debug!(jobs, "Configured rendering threads");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_existing_dotenv_is_reported() {
        let path = std::env::temp_dir().join(format!("halftone-{}.env", std::process::id()));
        std::fs::write(&path, "HALFTONE_DOTENV_TEST_KEY=1\n").unwrap();
        let path_str = path.to_str().unwrap();

        let loaded = load_first_dotenv(&["/nonexistent/.env", path_str]);
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, Some(path_str));
        assert_eq!(std::env::var("HALFTONE_DOTENV_TEST_KEY").as_deref(), Ok("1"));
    }

    #[test]
    fn test_no_dotenv_found() {
        assert_eq!(load_first_dotenv(&["/nonexistent/a.env", "/nonexistent/b.env"]), None);
    }
}
