use modsmith::identity::ModIdentity;
use modsmith::scaffold::create_mod_structure;
use std::fs;
use tempfile::TempDir;

fn identity() -> ModIdentity {
    let mut identity = ModIdentity::new("Medieval Overhaul", "medieval_overhaul");
    identity.tags.insert("Historical".to_string());
    identity.tags.insert("Balance".to_string());
    identity.supported_version = Some("1.12.1".to_string());
    identity
}

#[test]
fn test_creates_folder_and_both_files() {
    let temp_dir = TempDir::new().unwrap();
    let documents = temp_dir.path().join("mod");

    let artifact = create_mod_structure(&identity(), &documents).unwrap();

    assert_eq!(artifact.mod_folder_path, documents.join("medieval_overhaul"));
    assert_eq!(artifact.mod_file_path, documents.join("medieval_overhaul.mod"));
    assert_eq!(
        artifact.descriptor_file_path,
        documents.join("medieval_overhaul").join("descriptor.mod")
    );
    assert!(artifact.mod_folder_path.is_dir());
    assert!(artifact.mod_file_path.is_file());
    assert!(artifact.descriptor_file_path.is_file());
}

#[test]
fn test_descriptor_and_index_contents() {
    let temp_dir = TempDir::new().unwrap();
    let documents = temp_dir.path().join("mod");

    let artifact = create_mod_structure(&identity(), &documents).unwrap();

    let descriptor = fs::read_to_string(&artifact.descriptor_file_path).unwrap();
    assert!(descriptor.starts_with("version=\"1\"\n"));
    assert!(descriptor.contains("\t\"Historical\",\n\t\"Balance\"\n"));
    assert!(descriptor.contains("name=\"Medieval Overhaul\"\n"));
    assert!(descriptor.contains("supported_version=\"1.12.1\"\n"));
    assert!(!descriptor.contains("path="));

    let index = fs::read_to_string(&artifact.mod_file_path).unwrap();
    assert!(index.starts_with(&descriptor));
    let path_line = index.lines().last().unwrap();
    assert!(path_line.starts_with("path=\""));
    assert!(path_line.ends_with("/medieval_overhaul\""));
    assert!(!path_line.contains('\\'));
}

#[test]
fn test_scaffold_is_idempotent_and_preserves_unrelated_contents() {
    let temp_dir = TempDir::new().unwrap();
    let documents = temp_dir.path().join("mod");

    let first = create_mod_structure(&identity(), &documents).unwrap();

    // Unrelated file dropped into the mod folder between runs.
    let unrelated = first.mod_folder_path.join("notes.txt");
    fs::write(&unrelated, "keep me").unwrap();

    let second = create_mod_structure(&identity(), &documents).unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&unrelated).unwrap(), "keep me");
}

#[test]
fn test_empty_tags_scaffold_emits_fixes() {
    let temp_dir = TempDir::new().unwrap();
    let documents = temp_dir.path().join("mod");
    let mut identity = ModIdentity::new("Tiny Fix", "tiny_fix");
    identity.supported_version = Some("1.12.1".to_string());

    let artifact = create_mod_structure(&identity, &documents).unwrap();
    let descriptor = fs::read_to_string(&artifact.descriptor_file_path).unwrap();
    assert!(descriptor.contains("tags={\n\t\"Fixes\"\n}\n"));
}
