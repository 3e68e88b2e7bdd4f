//! # CLI Command Implementations
//!
//! This module contains the actual implementations of CLI commands.

use kgml_core::{
    Entry, EntryType, KgmlError, KgmlParser, ParserOptions, Pathway, strip_external_dtd,
};
use std::path::{Path, PathBuf};

// =============================================================================
// FILE SIZE LIMITS
// =============================================================================

/// Maximum KGML file size (100 MB).
///
/// The largest KEGG global maps are a few megabytes.
const MAX_KGML_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Validate file size before reading.
fn validate_file_size(path: &Path, max_size: u64) -> Result<(), KgmlError> {
    let metadata = std::fs::metadata(path)
        .map_err(|e| KgmlError::IoError(format!("Cannot read file metadata: {}", e)))?;

    if metadata.len() > max_size {
        return Err(KgmlError::IoError(format!(
            "File size {} bytes exceeds maximum allowed {} bytes",
            metadata.len(),
            max_size
        )));
    }
    Ok(())
}

/// Canonicalize an input path and make sure it names a regular file.
fn validate_file_path(path: &Path) -> Result<PathBuf, KgmlError> {
    let canonical = path.canonicalize().map_err(|e| {
        KgmlError::IoError(format!("Invalid file path '{}': {}", path.display(), e))
    })?;

    if !canonical.is_file() {
        return Err(KgmlError::IoError(format!(
            "Path '{}' is not a regular file",
            path.display()
        )));
    }

    Ok(canonical)
}

/// Validate an output path: its parent directory must exist.
fn validate_output_path(path: &Path) -> Result<PathBuf, KgmlError> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };

    let canonical_parent = parent.canonicalize().map_err(|e| {
        KgmlError::IoError(format!(
            "Invalid output directory '{}': {}",
            parent.display(),
            e
        ))
    })?;

    if !canonical_parent.is_dir() {
        return Err(KgmlError::IoError(format!(
            "Output directory '{}' is not a valid directory",
            parent.display()
        )));
    }

    let filename = path
        .file_name()
        .ok_or_else(|| KgmlError::IoError("Output path has no filename".to_string()))?;

    Ok(canonical_parent.join(filename))
}

// =============================================================================
// LOADING
// =============================================================================

/// Validate `file` and parse every pathway in it.
pub fn load_pathways(file: &Path, options: ParserOptions) -> Result<Vec<Pathway>, KgmlError> {
    let validated_path = validate_file_path(file)?;
    validate_file_size(&validated_path, MAX_KGML_FILE_SIZE)?;

    let pathways = KgmlParser::new(options).parse_file(&validated_path)?;
    if pathways.is_empty() {
        tracing::warn!("No <pathway> element found in {}", file.display());
    }
    Ok(pathways)
}

/// JSON summary of one pathway.
#[must_use]
pub fn pathway_summary(pathway: &Pathway) -> serde_json::Value {
    serde_json::json!({
        "name": pathway.name(),
        "org": pathway.org(),
        "number": pathway.number_padded(),
        "title": pathway.title(),
        "image": pathway.image(),
        "link": pathway.link(),
        "entry_count": pathway.entries().len(),
        "reaction_count": pathway.reactions().len(),
        "relation_count": pathway.relations().len()
    })
}

fn print_json(value: &serde_json::Value) {
    println!("{}", serde_json::to_string_pretty(value).unwrap_or_default());
}

// =============================================================================
// SUMMARY COMMAND
// =============================================================================

/// Show pathway metadata and element counts.
pub fn cmd_summary(file: &Path, options: ParserOptions, json_mode: bool) -> Result<(), KgmlError> {
    let pathways = load_pathways(file, options)?;

    if json_mode {
        let output: Vec<_> = pathways.iter().map(pathway_summary).collect();
        print_json(&serde_json::Value::Array(output));
        return Ok(());
    }

    for p in &pathways {
        println!("Pathway {}", p.name());
        println!("==================");
        println!("Title:     {}", p.title());
        println!("Organism:  {}", p.org());
        println!("Number:    {}", p.number_padded());
        println!("Image:     {}", p.image());
        println!("Link:      {}", p.link());
        println!();
        println!("Entries:   {}", p.entries().len());
        for t in EntryType::ALL {
            let n = p.entries().iter().filter(|e| e.entry_type == t).count();
            if n > 0 {
                println!("  {:<10}{}", t.as_str(), n);
            }
        }
        println!("Reactions: {}", p.reactions().len());
        println!("Relations: {}", p.relations().len());
        println!();
    }

    Ok(())
}

// =============================================================================
// ENTRIES COMMAND
// =============================================================================

/// List entries, optionally only those of one type.
pub fn cmd_entries(
    file: &Path,
    options: ParserOptions,
    json_mode: bool,
    entry_type: Option<&str>,
) -> Result<(), KgmlError> {
    let filter = entry_type.map(str::parse::<EntryType>).transpose()?;
    let pathways = load_pathways(file, options)?;

    let selected: Vec<_> = pathways
        .iter()
        .flat_map(|p| p.entries().iter().map(move |e| (p, e)))
        .filter(|(_, e)| filter.is_none_or(|t| e.entry_type == t))
        .collect();

    if json_mode {
        let output: Vec<_> = selected
            .iter()
            .map(|(p, e)| {
                serde_json::json!({
                    "pathway": p.name(),
                    "id": e.id,
                    "name": e.name,
                    "type": e.entry_type.as_str(),
                    "reaction": e.reaction
                })
            })
            .collect();
        print_json(&serde_json::Value::Array(output));
        return Ok(());
    }

    for (_, e) in &selected {
        let label = e.graphics.first().map(|g| g.name.as_str()).unwrap_or("");
        println!("{:>5}  {:<9} {}  {}", e.id, e.entry_type.as_str(), e.name, label);
    }
    println!("{} entries", selected.len());

    Ok(())
}

// =============================================================================
// ENTRY COMMAND
// =============================================================================

/// Show one entry and the relations that touch it.
pub fn cmd_entry(
    file: &Path,
    options: ParserOptions,
    json_mode: bool,
    id: i32,
) -> Result<(), KgmlError> {
    let pathways = load_pathways(file, options)?;

    let mut found = false;
    for p in &pathways {
        let Some(entry) = p.get_entry_for_id(id) else {
            continue;
        };
        found = true;

        if json_mode {
            let relations: Vec<_> = p
                .relations_for_entry(id)
                .map(|r| {
                    serde_json::json!({
                        "entry1": r.entry1,
                        "entry2": r.entry2,
                        "type": r.relation_type.as_str(),
                        "subtypes": r.subtypes
                    })
                })
                .collect();
            print_json(&serde_json::json!({
                "pathway": p.name(),
                "entry": entry,
                "relations": relations
            }));
            continue;
        }

        println!("Entry {} in {}", entry.id, p.name());
        println!("  Type:     {}", entry.entry_type);
        println!("  Names:    {}", entry.names().collect::<Vec<_>>().join(", "));
        if !entry.link.is_empty() {
            println!("  Link:     {}", entry.link);
        }
        if let Some(ref reaction) = entry.reaction {
            println!("  Reaction: {}", reaction);
        }
        if !entry.components.is_empty() {
            println!("  Members:  {:?}", entry.components);
        }
        for g in &entry.graphics {
            println!(
                "  Graphics: {} {} at ({}, {}) {}x{} fg {} bg {}",
                g.shape, g.name, g.x, g.y, g.width, g.height, g.fgcolor, g.bgcolor
            );
        }

        let relations: Vec<_> = p.relations_for_entry(id).collect();
        println!("  Relations: {}", relations.len());
        for r in relations {
            let (a, b) = r.endpoints(p);
            let describe = |e: Option<&Entry>, entry_id: i32| match e {
                Some(e) => format!("{} [{}]", entry_id, e.name),
                None => format!("{} [missing]", entry_id),
            };
            let subtypes: Vec<_> = r.subtypes.keys().map(String::as_str).collect();
            println!(
                "    {} -> {} ({}) {}",
                describe(a, r.entry1),
                describe(b, r.entry2),
                r.relation_type,
                subtypes.join(", ")
            );
        }
    }

    if !found {
        println!("Entry {} not found", id);
    }

    Ok(())
}

// =============================================================================
// EXPORT COMMAND
// =============================================================================

/// Write the parsed pathways as pretty JSON.
pub fn cmd_export(file: &Path, options: ParserOptions, output: &Path) -> Result<(), KgmlError> {
    let validated_output = validate_output_path(output)?;
    let pathways = load_pathways(file, options)?;

    let data = serde_json::to_vec_pretty(&pathways)
        .map_err(|e| KgmlError::SerializationError(e.to_string()))?;

    std::fs::write(&validated_output, &data)
        .map_err(|e| KgmlError::IoError(format!("Write file: {}", e)))?;

    println!(
        "Exported {} pathways ({} bytes) to {:?}",
        pathways.len(),
        data.len(),
        validated_output
    );

    Ok(())
}

// =============================================================================
// STRIP-DTD COMMAND
// =============================================================================

/// Rewrite the external DTD declaration, to a file or stdout.
pub fn cmd_strip_dtd(file: &Path, output: Option<&Path>) -> Result<(), KgmlError> {
    let validated_path = validate_file_path(file)?;
    validate_file_size(&validated_path, MAX_KGML_FILE_SIZE)?;

    let text = std::fs::read_to_string(&validated_path)
        .map_err(|e| KgmlError::IoError(format!("Read file: {}", e)))?;
    let stripped = strip_external_dtd(&text);

    match output {
        Some(out) => {
            let validated_output = validate_output_path(out)?;
            std::fs::write(&validated_output, stripped.as_bytes())
                .map_err(|e| KgmlError::IoError(format!("Write file: {}", e)))?;
            tracing::info!("Wrote {} bytes to {:?}", stripped.len(), validated_output);
        }
        None => print!("{}", stripped),
    }

    Ok(())
}
