mod checks_tests;
