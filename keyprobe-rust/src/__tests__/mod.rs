mod key_checker_tests;
