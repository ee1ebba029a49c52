#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;

use super::*;
use crate::test_utils::{create_tree, temp_project};

#[test]
fn empty_chain_when_no_config_exists() {
    let tmp = temp_project();
    assert!(config_chain(tmp.path()).is_empty());
}

#[test]
fn finds_config_in_start_directory() {
    let tmp = temp_project();
    create_tree(tmp.path(), &[("groom.toml", "")]);

    let chain = config_chain(tmp.path());
    assert_eq!(chain, vec![tmp.path().join("groom.toml")]);
}

#[test]
fn chain_is_outermost_first() {
    let tmp = temp_project();
    create_tree(
        tmp.path(),
        &[("groom.toml", ""), ("sub/groom.toml", ""), ("sub/a.clj", "")],
    );

    let chain = config_chain(&tmp.path().join("sub"));
    assert_eq!(
        chain,
        vec![
            tmp.path().join("groom.toml"),
            tmp.path().join("sub/groom.toml"),
        ]
    );
}

#[test]
fn stops_at_git_root() {
    let tmp = temp_project();
    create_tree(
        tmp.path(),
        &[("groom.toml", ""), ("nested/groom.toml", "")],
    );
    fs::create_dir(tmp.path().join("nested/.git")).unwrap();

    // The walk from inside `nested` must not reach the outer config.
    let chain = config_chain(&tmp.path().join("nested"));
    assert_eq!(chain, vec![tmp.path().join("nested/groom.toml")]);
}

#[test]
fn skips_directories_without_config() {
    let tmp = temp_project();
    create_tree(tmp.path(), &[("groom.toml", ""), ("a/b/c/d.clj", "")]);

    let chain = config_chain(&tmp.path().join("a/b/c"));
    assert_eq!(chain, vec![tmp.path().join("groom.toml")]);
}
