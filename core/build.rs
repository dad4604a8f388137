use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

const QUESTION_TYPES: &[(&str, &str)] = &[
    ("MCQ", "QuestionType::Mcq"),
    ("Short Answer", "QuestionType::ShortAnswer"),
    ("Long Answer", "QuestionType::LongAnswer"),
];

const DIFFICULTIES: &[(&str, &str)] = &[
    ("Easy", "Difficulty::Easy"),
    ("Medium", "Difficulty::Medium"),
    ("Hard", "Difficulty::Hard"),
];

const MCQ_OPTION_COUNT: usize = 4;

#[derive(Deserialize)]
struct BankFile {
    questions: Vec<QuestionEntry>,
}

#[derive(Deserialize)]
struct QuestionEntry {
    #[serde(rename = "type")]
    question_type: String,
    difficulty: String,
    text: String,
    options: Option<Vec<String>>,
}

fn main() {
    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir);
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=QUESTION_BANK_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let bank_path = resolve_bank_path(workspace_root);
    println!("cargo:rerun-if-changed={}", bank_path.display());

    let contents = fs::read_to_string(&bank_path).unwrap_or_else(|err| {
        panic!(
            "failed to read question bank at {}: {err}",
            bank_path.display()
        )
    });

    let bank: BankFile = toml::from_str(&contents).unwrap_or_else(|err| {
        panic!(
            "failed to parse question bank at {}: {err}",
            bank_path.display()
        )
    });

    validate_entries(&bank.questions, &bank_path);

    let mut output = String::new();
    writeln!(&mut output, "pub const QUESTION_BANK: &[BankEntry] = &[").unwrap();
    for (label, variant) in QUESTION_TYPES {
        writeln!(&mut output, "    BankEntry {{").unwrap();
        writeln!(&mut output, "        question_type: {variant},").unwrap();
        writeln!(&mut output, "        questions: &[").unwrap();
        for entry in bank.questions.iter().filter(|entry| entry.question_type == *label) {
            let difficulty = difficulty_variant(&entry.difficulty).unwrap_or("Difficulty::Easy");
            let options = match entry.options.as_deref() {
                Some(options) if *label == "MCQ" => {
                    let items: Vec<String> = options.iter().map(|option| rust_string(option)).collect();
                    format!("Some([{}])", items.join(", "))
                }
                _ => "None".to_string(),
            };
            writeln!(&mut output, "            Question {{").unwrap();
            writeln!(&mut output, "                text: {},", rust_string(entry.text.trim())).unwrap();
            writeln!(&mut output, "                options: {options},").unwrap();
            writeln!(&mut output, "                difficulty: {difficulty},").unwrap();
            writeln!(&mut output, "            }},").unwrap();
        }
        writeln!(&mut output, "        ],").unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }
    writeln!(&mut output, "];").unwrap();

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));
    let out_path = out_dir.join("question_bank.rs");
    fs::write(&out_path, output).unwrap_or_else(|err| {
        panic!("failed to write {}: {err}", out_path.display())
    });
}

fn resolve_bank_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("QUESTION_BANK_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("questions/bank.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}

fn difficulty_variant(raw: &str) -> Option<&'static str> {
    DIFFICULTIES
        .iter()
        .find(|(label, _)| *label == raw)
        .map(|(_, variant)| *variant)
}

fn validate_entries(entries: &[QuestionEntry], bank_path: &Path) {
    if entries.is_empty() {
        panic!("question bank {} has no entries", bank_path.display());
    }

    for (label, _) in QUESTION_TYPES {
        if !entries.iter().any(|entry| entry.question_type == *label) {
            panic!(
                "question bank {} has no '{}' questions",
                bank_path.display(),
                label
            );
        }
    }

    for (index, entry) in entries.iter().enumerate() {
        if !QUESTION_TYPES.iter().any(|(label, _)| *label == entry.question_type) {
            panic!(
                "question #{} has unknown type '{}' in {}",
                index + 1,
                entry.question_type,
                bank_path.display()
            );
        }
        if difficulty_variant(&entry.difficulty).is_none() {
            panic!(
                "question #{} has unknown difficulty '{}' in {}",
                index + 1,
                entry.difficulty,
                bank_path.display()
            );
        }
        if entry.text.trim().is_empty() {
            panic!(
                "question #{} has empty text in {}",
                index + 1,
                bank_path.display()
            );
        }
        let option_count = entry.options.as_ref().map(Vec::len);
        if entry.question_type == "MCQ" {
            if option_count != Some(MCQ_OPTION_COUNT) {
                panic!(
                    "MCQ question #{} must have exactly {} options in {}",
                    index + 1,
                    MCQ_OPTION_COUNT,
                    bank_path.display()
                );
            }
        } else if option_count.is_some() {
            panic!(
                "{} question #{} cannot have options in {}",
                entry.question_type,
                index + 1,
                bank_path.display()
            );
        }
    }
}
