use sasm::vm::{Cause, Error, Interpreter, Kind, Opcode, Register, TestingDevice, Value};

fn interpreter_with(lines: &[&str]) -> Interpreter<TestingDevice> {
    let mut i = Interpreter::new(TestingDevice::new());
    for line in lines {
        i.step(line).unwrap();
    }
    i
}

fn ax(i: &Interpreter<TestingDevice>) -> &Value {
    i.machine().get(Register::Ax)
}

#[test]
fn test_integer_addition_stays_integer() {
    let mut i = interpreter_with(&["mov ax, 2"]);
    i.step("add ax, 3").unwrap();
    assert_eq!(ax(&i).as_str(), "5");
    assert_eq!(ax(&i).kind(), Kind::Int);
}

#[test]
fn test_integer_plus_float_promotes_to_float() {
    let mut i = interpreter_with(&["mov ax, 2"]);
    i.step("add ax, 3.5").unwrap();
    assert_eq!(ax(&i).as_str(), "5.5");
    assert_eq!(ax(&i).kind(), Kind::Float);
}

#[test]
fn test_float_result_keeps_its_float_encoding() {
    // 2.5 + 2.5 is a whole number, but the result must still read back
    // as a float.
    let mut i = interpreter_with(&["mov ax, 2.5"]);
    i.step("add ax, 2.5").unwrap();
    assert_eq!(ax(&i).as_str(), "5.0");
    assert_eq!(ax(&i).kind(), Kind::Float);
}

#[test]
fn test_scientific_operands() {
    let mut i = interpreter_with(&["mov ax, -2e-5"]);
    i.step("add ax, 0.5").unwrap();
    assert_eq!(ax(&i).as_str(), "0.49998");
    assert_eq!(ax(&i).kind(), Kind::Float);
}

#[test]
fn test_string_addition_concatenates_and_strips_the_seam() {
    let mut i = interpreter_with(&["mov ax, \"foo\"", "mov bx, \"bar\""]);
    i.step("add ax, bx").unwrap();
    assert_eq!(ax(&i).as_str(), "\"foobar\"");
}

#[test]
fn test_string_addition_with_a_literal() {
    let mut i = interpreter_with(&["mov ax, \"foo\""]);
    i.step("add ax, \"bar\"").unwrap();
    assert_eq!(ax(&i).as_str(), "\"foobar\"");
}

#[test]
fn test_adding_a_string_to_a_number_is_a_type_mismatch() {
    let mut i = interpreter_with(&["mov ax, \"foo\"", "mov bx, 3"]);
    assert_eq!(
        i.step("add ax, bx"),
        Err(Cause::Exec(Error::TypeMismatch {
            op: Opcode::Add,
            lhs: Value::new("\"foo\""),
            rhs: Value::new("3"),
        }))
    );
    let mut i = interpreter_with(&["mov ax, 3"]);
    assert!(matches!(
        i.step("add ax, \"foo\""),
        Err(Cause::Exec(Error::TypeMismatch { .. }))
    ));
}

#[test]
fn test_subtracting_strings_is_a_type_mismatch() {
    let mut i = interpreter_with(&["mov ax, \"foo\"", "mov bx, \"bar\""]);
    assert!(matches!(
        i.step("sub ax, bx"),
        Err(Cause::Exec(Error::TypeMismatch { .. }))
    ));
}

#[test]
fn test_an_unwritten_register_behaves_as_a_string() {
    // Registers start out empty, and empty text classifies as a string:
    // adding a number to one is a mismatch, adding a string works.
    let mut i = Interpreter::new(TestingDevice::new());
    assert!(matches!(
        i.step("add ax, 5"),
        Err(Cause::Exec(Error::TypeMismatch { .. }))
    ));
    let mut i = Interpreter::new(TestingDevice::new());
    i.step("add ax, \"hi\"").unwrap();
    assert_eq!(ax(&i).as_str(), "\"hi\"");
}

#[test]
fn test_integer_subtraction() {
    let mut i = interpreter_with(&["mov ax, 2"]);
    i.step("sub ax, 5").unwrap();
    assert_eq!(ax(&i).as_str(), "-3");
}

#[test]
fn test_multiplication_mirrors_addition_coercion() {
    let mut i = interpreter_with(&["mov ax, 6"]);
    i.step("mul ax, 7").unwrap();
    assert_eq!(ax(&i).as_str(), "42");
    assert_eq!(ax(&i).kind(), Kind::Int);

    let mut i = interpreter_with(&["mov ax, 1.5"]);
    i.step("mul ax, 4").unwrap();
    assert_eq!(ax(&i).as_str(), "6.0");
    assert_eq!(ax(&i).kind(), Kind::Float);
}

#[test]
fn test_integer_division_truncates() {
    let mut i = interpreter_with(&["mov ax, 7"]);
    i.step("div ax, 2").unwrap();
    assert_eq!(ax(&i).as_str(), "3");
}

#[test]
fn test_float_division() {
    let mut i = interpreter_with(&["mov ax, 7.0"]);
    i.step("div ax, 2").unwrap();
    assert_eq!(ax(&i).as_str(), "3.5");
}

#[test]
fn test_integer_division_by_zero_fails() {
    let mut i = interpreter_with(&["mov ax, 7"]);
    assert_eq!(
        i.step("div ax, 0"),
        Err(Cause::Exec(Error::DivisionByZero))
    );
}

#[test]
fn test_float_division_by_zero_is_infinite() {
    let mut i = interpreter_with(&["mov ax, 7.0"]);
    i.step("div ax, 0.0").unwrap();
    assert_eq!(ax(&i).as_str(), "inf");
}

#[test]
fn test_oversized_integer_tokens_fall_back_to_float() {
    // Wider than 64 bits, so the integer path can't hold it.
    let mut i = interpreter_with(&["mov ax, 92233720368547758080"]);
    i.step("add ax, 0").unwrap();
    assert_eq!(ax(&i).kind(), Kind::Float);
}

#[test]
fn test_arithmetic_source_register_is_resolved() {
    let mut i = interpreter_with(&["mov ax, 10", "mov bx, 4"]);
    i.step("sub ax, bx").unwrap();
    assert_eq!(ax(&i).as_str(), "6");
    // The source register is untouched.
    assert_eq!(i.machine().get(Register::Bx).as_str(), "4");
}
