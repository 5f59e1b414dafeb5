mod add_expectation;
mod errors;
mod invoked;
mod json_table;
mod missing_methods;
mod my_class;
mod records;
