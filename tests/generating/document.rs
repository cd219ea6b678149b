#[cfg(test)]
mod examples {
    use std::path::Path;

    use utcgen::generating;
    use utcgen::parsing;
    use utcgen::templating::{self, MsTest};

    fn trim(s: &str) -> &str {
        s.strip_prefix('\n')
            .unwrap_or(s)
    }

    fn render(content: &str) -> String {
        let specification = parsing::parse(content);
        let units = generating::generate(&specification);
        templating::fill(&MsTest::default(), &units).unwrap()
    }

    /// Pull out the body of the named method, up to the closing brace at
    /// method indentation.
    fn method<'a>(output: &'a str, name: &str) -> &'a str {
        let signature = format!("public async Task {}()", name);
        let start = output
            .find(&signature)
            .unwrap_or_else(|| panic!("method {} not generated", name));
        let rest = &output[start..];
        let end = rest
            .find("\n        }")
            .unwrap();
        &rest[..end]
    }

    #[test]
    fn login_end_to_end() {
        let content = trim(
            r#"
## FUNC_01
| Function Name | Login |
| | UTCID1 | UTCID2 |
| Input | | |
| Username | | alice |
| | | bob |
| Exception | | InvalidCredentials |
            "#,
        );

        let output = render(content);

        let first = method(&output, "FUNC_01_UTCID1_Login_Success");
        assert!(first.contains(r#"            var username = "alice";"#));
        assert!(first.contains("            // Expected exception: InvalidCredentials"));
        assert!(first.contains("var db = BuildDb(nameof(FUNC_01_UTCID1_Login_Success));"));

        let second = method(&output, "FUNC_01_UTCID2_Login_InvalidInput");
        assert!(second.contains(r#"            var username = "bob";"#));
        assert!(second.contains("            // Expected exception: InvalidCredentials"));

        assert_eq!(
            output
                .matches("[TestMethod]")
                .count(),
            2
        );
    }

    #[test]
    fn last_value_repeats() {
        let content = trim(
            r#"
## FUNC_04
| Function Name | Search |
| | UTCID1 | UTCID2 | UTCID3 |
| Input | | |
| Keyword | | A |
| | | B |
            "#,
        );

        let output = render(content);

        assert!(method(&output, "FUNC_04_UTCID1_Search_Success").contains(r#"var keyword = "A";"#));
        assert!(
            method(&output, "FUNC_04_UTCID2_Search_InvalidInput").contains(r#"var keyword = "B";"#)
        );
        assert!(method(&output, "FUNC_04_UTCID3_Search_NotFound").contains(r#"var keyword = "B";"#));
    }

    #[test]
    fn sparse_function_gets_placeholders() {
        let output = render("## FUNC_09\n| | UTCID1 |\n");

        let body = method(&output, "FUNC_09_UTCID1_UnknownFunction_Success");
        assert!(body.contains("            // No input parameters defined"));
        assert!(body.contains("            // TODO: Add specific assertions based on test requirements"));
    }

    #[test]
    fn only_boilerplate_without_functions() {
        let output = render("# Nothing to see here\n");

        assert!(!output.contains("[TestMethod]"));
        assert!(output.contains("public class GeneratedFunctionTests"));
        assert_eq!(output, templating::fill(&MsTest::default(), &[]).unwrap());
    }

    #[test]
    fn generation_is_repeatable() {
        let file = Path::new("tests/samples/courts.md");
        let content = parsing::load(file).unwrap();

        let first = render(&content);
        let second = render(&content);
        assert_eq!(first, second);

        let courts = method(&first, "FUNC_02_UTCID3_GetCourts_NotFound");
        assert!(courts.contains("            var areaid = 7;"));
        assert!(courts.contains("            var includeclosed = false;"));
        assert!(courts.contains("            // Expected return: List of courts"));

        let login = method(&first, "FUNC_01_UTCID2_Login_InvalidInput");
        assert!(login.contains(r#"            var password = "secret";"#));

        // FUNC_03 has no test cases
        assert!(!first.contains("FUNC_03"));
    }
}
