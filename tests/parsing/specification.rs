#[cfg(test)]
mod verify {
    use utcgen::language::*;
    use utcgen::parsing;

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    #[test]
    fn document_without_functions() {
        let specification = parsing::parse("# Notes\n\n| Function Name | Login |\n");
        assert!(specification.is_empty());

        let specification = parsing::parse("");
        assert!(specification.is_empty());
    }

    #[test]
    fn test_case_ids_sorted_numerically() {
        let content = trim(
            r#"
## FUNC_05
| | UTCID3 | UTCID1 | UTCID2 |
            "#,
        );

        let specification = parsing::parse(content);
        let record = specification
            .get("FUNC_05")
            .unwrap();

        assert_eq!(
            record.test_case_ids,
            vec![TestCaseId("UTCID1"), TestCaseId("UTCID2"), TestCaseId("UTCID3")]
        );
        assert_eq!(record.total_test_cases(), 3);
    }

    #[test]
    fn state_resets_between_blocks() {
        let content = trim(
            r#"
## FUNC_01
| Input | | |
| Username | | alice |
## FUNC_02
| | | stray |
| Return | | Ok |
            "#,
        );

        let specification = parsing::parse(content);
        assert_eq!(specification.len(), 2);

        let second = specification
            .get("FUNC_02")
            .unwrap();
        assert!(second
            .inputs
            .is_empty());
        assert!(second
            .preconditions
            .is_empty());
        assert_eq!(second.expected_returns, vec!["Ok"]);
    }

    #[test]
    fn windows_line_endings() {
        let content = "## FUNC_01\r\n| Function Name | Login |\r\n| | UTCID1 |\r\n";

        let specification = parsing::parse(content);
        let record = specification
            .get("FUNC_01")
            .unwrap();
        assert_eq!(record.name, "Login");
        assert_eq!(record.test_case_ids, vec![TestCaseId("UTCID1")]);
    }
}
