mod main_flow_tests;
