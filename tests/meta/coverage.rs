//! Checks that every source file under `src/` has a unit test file under `tests/unit/`

#[cfg(test)]
mod tests {
    use std::collections::HashSet;
    use std::fs;
    use std::io;
    use std::path::Path;

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";

    // Entry points and module organization files carry no logic of their own
    fn is_organizational(relative: &str) -> bool {
        relative == "main.rs" || relative == "lib.rs" || relative.ends_with("mod.rs")
    }

    fn tree(dir: &str) -> HashSet<String> {
        let root = Path::new(dir);
        collect_relative_paths(root, root).unwrap_or_else(|error| {
            assert!(!root.exists(), "Failed to read {dir}: {error}");
            HashSet::new()
        })
    }

    // Tests src files are mirrored by unit test files
    // Verified by adding an untested module
    #[test]
    fn test_all_src_files_have_unit_tests() {
        let src_paths = tree(SRC_DIR);
        let test_paths = tree(UNIT_DIR);

        let mut missing: Vec<&String> = src_paths
            .iter()
            .filter(|path| !is_organizational(path) && !test_paths.contains(*path))
            .collect();
        missing.sort();

        assert!(
            missing.is_empty(),
            "Source files without unit tests:\n{}",
            missing
                .iter()
                .map(|path| format!("  - src/{path} -> {UNIT_DIR}/{path}"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // Tests unit test files do not outlive their src files
    // Verified by deleting a module and keeping its tests
    #[test]
    fn test_all_unit_tests_have_src_counterparts() {
        let src_paths = tree(SRC_DIR);
        let test_paths = tree(UNIT_DIR);

        let mut orphaned: Vec<&String> = test_paths
            .iter()
            .filter(|path| !is_organizational(path) && !src_paths.contains(*path))
            .collect();
        orphaned.sort();

        assert!(
            orphaned.is_empty(),
            "Unit test files without a src counterpart:\n{}",
            orphaned
                .iter()
                .map(|path| format!("  - {UNIT_DIR}/{path} -> src/{path} (missing)"))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    // Tests every non-organizational test file declares a test
    // Verified by adding an empty test file
    #[test]
    fn test_all_test_files_contain_tests() {
        let tests_dir = Path::new("tests");
        let mut files_without_tests = Vec::new();

        if let Err(error) = check_test_files(tests_dir, &mut files_without_tests) {
            assert!(!tests_dir.exists(), "Failed to scan tests directory: {error}");
        }

        assert!(
            files_without_tests.is_empty(),
            "Test files without any #[test] function:\n{}",
            files_without_tests.join("\n")
        );
    }

    fn collect_relative_paths(dir: &Path, base: &Path) -> Result<HashSet<String>, io::Error> {
        let mut paths = HashSet::new();

        if !dir.is_dir() {
            return Ok(paths);
        }

        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            let relative = path
                .strip_prefix(base)
                .map_err(|_| io::Error::other("Failed to strip prefix"))?
                .to_string_lossy()
                .to_string();

            if path.is_dir() {
                paths.extend(collect_relative_paths(&path, base)?);
                paths.insert(relative);
            } else if path.extension().and_then(|ext| ext.to_str()) == Some("rs") {
                paths.insert(relative);
            }
        }

        Ok(paths)
    }

    fn check_test_files(
        dir: &Path,
        files_without_tests: &mut Vec<String>,
    ) -> Result<(), io::Error> {
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();

            if path.is_dir() {
                check_test_files(&path, files_without_tests)?;
                continue;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some("rs") {
                continue;
            }

            let file_name = path.file_name().and_then(|name| name.to_str()).unwrap_or_default();
            if file_name == "main.rs" || file_name == "mod.rs" {
                continue;
            }

            if !fs::read_to_string(&path)?.contains("#[test]") {
                files_without_tests.push(format!("  - {}", path.display()));
            }
        }

        Ok(())
    }
}
