//! Tests for the filter-accessor generator

use super::*;
use crate::error::Error;
use pretty_assertions::assert_eq;

#[test]
fn test_render_is_deterministic() {
    let generator = Generator::builtin();
    let first = generator.render().unwrap();
    let second = generator.render().unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_render_sorts_service_names() {
    // Deliberately unsorted input
    let generator = Generator::new(["rds", "ec2"]);
    let output = generator.render().unwrap();

    let ec2_pos = output.find("pub fn ec2_filters").unwrap();
    let rds_pos = output.find("pub fn rds_filters").unwrap();
    assert!(ec2_pos < rds_pos, "ec2 accessor must precede rds accessor");

    // Sorted input renders identically
    let sorted = Generator::new(["ec2", "rds"]).render().unwrap();
    assert_eq!(output, sorted);
}

#[test]
fn test_render_dedups_service_names() {
    let output = Generator::new(["ec2", "ec2"]).render().unwrap();
    assert_eq!(output.matches("pub fn ec2_filters").count(), 1);
}

#[test]
fn test_render_emits_one_accessor_per_service() {
    let output = Generator::builtin().render().unwrap();
    for service in crate::filters::services::SLICE_SERVICE_NAMES {
        let needle = format!("pub fn {service}_filters");
        assert_eq!(
            output.matches(needle.as_str()).count(),
            1,
            "expected exactly one accessor for {service}"
        );
    }
}

#[test]
fn test_render_header_and_use_block() {
    let output = Generator::new(["rds", "ec2"]).render().unwrap();
    assert!(output.starts_with("// Code generated by generate-service-filters; DO NOT EDIT.\n"));
    assert!(output.contains("use crate::filters::sdk::{ec2, rds};"));
    assert!(output.contains("use crate::filters::NameValuesFilters;"));
}

#[test]
fn test_render_resolves_package_alias() {
    let output = Generator::new(["databasemigrationservice"]).render().unwrap();
    assert!(output.contains("use crate::filters::sdk::{dms};"));
    assert!(output.contains("pub fn databasemigrationservice_filters(&self) -> Option<Vec<dms::Filter>>"));
}

#[test]
fn test_render_unknown_service_fails() {
    let result = Generator::new(["nosuchservice"]).render();
    assert!(matches!(result, Err(Error::UnknownService { .. })));
}

#[test]
fn test_render_empty_service_list_fails() {
    let result = Generator::new(Vec::<String>::new()).render();
    assert!(matches!(result, Err(Error::Generation { .. })));
}

#[test]
fn test_checked_in_file_matches_fresh_render() {
    let rendered = Generator::builtin().render().unwrap();
    let checked_in = include_str!("../filters/service_filters_gen.rs");
    assert_eq!(rendered, checked_in);
}

#[test]
fn test_write_to_creates_and_overwrites() {
    let dir = tempfile::tempdir().unwrap();
    let generator = Generator::builtin();

    let path = generator.write_to(dir.path()).unwrap();
    assert_eq!(path, dir.path().join(GENERATED_FILENAME));
    let first = std::fs::read_to_string(&path).unwrap();

    // Clobber the file, then regenerate over it
    std::fs::write(&path, "stale contents").unwrap();
    generator.write_to(dir.path()).unwrap();
    let second = std::fs::read_to_string(&path).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_check_detects_stale_file() {
    let dir = tempfile::tempdir().unwrap();
    let generator = Generator::builtin();

    generator.write_to(dir.path()).unwrap();
    assert!(generator.check(dir.path()).is_ok());

    std::fs::write(dir.path().join(GENERATED_FILENAME), "stale contents").unwrap();
    assert!(matches!(
        generator.check(dir.path()),
        Err(Error::StaleGeneratedFile { .. })
    ));
}

#[test]
fn test_check_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        Generator::builtin().check(dir.path()),
        Err(Error::FileNotFound { .. })
    ));
}
