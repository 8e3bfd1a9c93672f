use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use atomic_write_file::AtomicWriteFile;

use crate::profile::{get_profile_path, schema::CompleteProfile};
use crate::scoring::encouragement_score;

/// Prompt user with a message and return their trimmed input.
fn prompt(message: &str) -> Result<String> {
    print!("{}", message);
    std::io::stdout()
        .flush()
        .context("Failed to flush stdout")?;
    let mut input = String::new();
    std::io::stdin()
        .lock()
        .read_line(&mut input)
        .context("Failed to read input")?;
    Ok(input.trim().to_string())
}

/// Prompt user with a message and a default value. Returns default if input is empty.
fn prompt_with_default(message: &str, default: &str) -> Result<String> {
    let input = prompt(&format!("{} [{}]: ", message, default))?;
    if input.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(input)
    }
}

/// Prompt user with a yes/no question. Returns bool based on input and default.
fn prompt_yes_no(message: &str, default_yes: bool) -> Result<bool> {
    let hint = if default_yes { "Y/n" } else { "y/N" };
    let input = prompt(&format!("{} [{}]: ", message, hint))?;
    let input = input.to_lowercase();
    if input.is_empty() {
        Ok(default_yes)
    } else {
        Ok(input == "y" || input == "yes")
    }
}

/// Print text with a typewriter effect, one character at a time.
fn typewriter(text: &str) {
    use std::thread;
    use std::time::Duration;
    for c in text.chars() {
        print!("{}", c);
        std::io::stdout().flush().ok();
        thread::sleep(Duration::from_millis(18));
    }
    println!();
}

/// Run the interactive bootstrap to create a blank profile file.
///
/// Collects the contact basics, reports the early encouragement score,
/// and writes a blank-form profile template the user fills in by hand
/// (or by exporting from the web app).
///
/// If `default_path` is Some, uses that as the profile file path.
/// Otherwise, prompts the user with the default profile path.
pub fn run_init_wizard(default_path: Option<PathBuf>) -> Result<()> {
    println!();
    typewriter("GrowthCharters Profile Setup");
    println!("============================");
    println!();

    typewriter("Let's start with the basics. Everything here is optional -- empty answers just score zero later.");
    println!();

    let full_name = prompt("Full name: ")?;
    let email = prompt("Email: ")?;
    let phone = prompt("Phone: ")?;

    let early = encouragement_score(!full_name.is_empty(), !email.is_empty(), !phone.is_empty());
    println!();
    println!("Starting score: {}/13", early);
    typewriter("That's your encouragement score -- the GC Score itself comes from the full questionnaire.");

    // Profile path
    let default_profile_path = default_path.unwrap_or_else(get_profile_path);
    println!();
    let path_str = prompt_with_default(
        "Where should the profile be saved?",
        &default_profile_path.display().to_string(),
    )?;
    let profile_path = PathBuf::from(&path_str);

    if profile_path.exists() {
        let overwrite = prompt_yes_no(
            &format!(
                "Profile already exists at {}. Overwrite?",
                profile_path.display()
            ),
            false,
        )?;
        if !overwrite {
            println!("Aborted.");
            return Ok(());
        }
    }

    let mut profile = CompleteProfile::default();
    profile.candidate_foundation.full_name = full_name;
    profile.candidate_foundation.email = email;
    profile.candidate_foundation.phone = phone;

    write_profile_template(&profile_path, &profile)?;

    println!();
    println!("Profile template written to {}", profile_path.display());
    typewriter("Fill in the questionnaire sections, then run `gc-score` to see your GC Score breakdown.");

    Ok(())
}

/// Write a profile as YAML, atomically so a crash never leaves a
/// half-written file behind.
pub fn write_profile_template(path: &PathBuf, profile: &CompleteProfile) -> Result<()> {
    let yaml = serde_saphyr::to_string(profile)
        .map_err(|e| anyhow::anyhow!("Failed to serialize profile: {}", e))?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    let mut file = AtomicWriteFile::open(path)
        .with_context(|| format!("Failed to open atomic write file at {}", path.display()))?;
    file.write_all(yaml.as_bytes())
        .with_context(|| format!("Failed to write profile to {}", path.display()))?;
    file.commit()
        .with_context(|| format!("Failed to save profile to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_template_roundtrips_through_loader() {
        let path = env::temp_dir().join(format!(
            "gc-score-test-{}-template.yaml",
            std::process::id()
        ));
        let mut profile = CompleteProfile::default();
        profile.candidate_foundation.full_name = "Ada Lovelace".to_string();

        write_profile_template(&path, &profile).unwrap();
        let loaded = crate::profile::load_profile(Some(path.clone())).unwrap();
        assert_eq!(loaded, profile);

        std::fs::remove_file(path).ok();
    }
}
