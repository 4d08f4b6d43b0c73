//! Basic usage example for caporal-validator

use caporal_validator::prelude::*;

fn main() {
    let program = Program::new("basic_usage").into_shared();

    let ports = Validator::new(TypeFlags::INT | TypeFlags::ARRAY, program.clone());
    match ports.validate("80,443") {
        Ok(value) => println!("✓ ports: {value:?}"),
        Err(e) => println!("✗ Error: {e}"),
    }

    let verbose = Validator::new(TypeFlags::BOOL, program.clone());
    match verbose.validate("perhaps") {
        Ok(value) => println!("✓ verbose: {value:?}"),
        Err(e) => println!("✗ 'perhaps' is invalid: {e}"),
    }

    let region = Validator::new(ValidatorSpec::pattern("^[a-z]{2}-[a-z]+$"), program.clone());
    match region.validate("eu-west") {
        Ok(value) => println!("✓ region: {value}"),
        Err(e) => println!("✗ Error: {e}"),
    }

    // A mask with no known flag is a setup error, recorded by the program.
    let _ = Validator::new(0u32, program.clone());
    for error in program.fatal_errors() {
        println!("setup error: {error}");
    }
}
