#[cfg(test)]
mod samples {
    use std::path::Path;

    use utcgen::language::*;
    use utcgen::parsing;

    #[test]
    fn courts_sample() {
        let file = Path::new("tests/samples/courts.md");

        let content = parsing::load(file)
            .unwrap_or_else(|e| panic!("Failed to load file {:?}: {:?}", file, e));

        let specification = parsing::parse(&content);

        let keys: Vec<String> = specification
            .functions
            .iter()
            .map(|record| record.key())
            .collect();
        assert_eq!(keys, vec!["FUNC_01", "FUNC_02", "FUNC_03"]);

        let login = specification
            .get("FUNC_01")
            .unwrap();
        assert_eq!(login.number, "01");
        assert_eq!(login.name, "Login");
        assert_eq!(login.created_by, "alice");
        assert_eq!(
            login.test_requirement,
            "Users log in with a username and password"
        );
        assert_eq!(
            login.test_case_ids,
            vec![TestCaseId("UTCID1"), TestCaseId("UTCID2")]
        );
        assert_eq!(login.preconditions, vec!["Account exists"]);
        assert_eq!(
            login
                .inputs
                .get("Username"),
            Some(&["alice", "bob"][..])
        );
        assert_eq!(
            login
                .inputs
                .get("Password"),
            Some(&["secret"][..])
        );
        assert_eq!(login.expected_returns, vec!["Token"]);
        assert_eq!(login.exceptions, vec!["InvalidCredentials"]);
        assert!(login
            .database_changes
            .is_empty());

        let courts = specification
            .get("FUNC_02")
            .unwrap();
        assert_eq!(courts.name, "GetCourts");
        assert_eq!(courts.created_by, "");
        assert_eq!(courts.total_test_cases(), 3);
        assert_eq!(
            courts
                .inputs
                .get("IncludeClosed"),
            Some(&["true", "false"][..])
        );
        assert_eq!(courts.database_changes, vec!["None"]);

        let empty = specification
            .get("FUNC_03")
            .unwrap();
        assert_eq!(empty, &FunctionRecord::new("03"));
    }

    #[test]
    fn missing_file() {
        let file = Path::new("tests/samples/nonexistent.md");

        let error = parsing::load(file).unwrap_err();
        assert_eq!(error.problem, "File not found");
        assert_eq!(error.filename, file);
    }
}
