//! Tests for register instructions (INC, DEC, IRX, GLO, GHI, PLO, PHI)

use lib1802::{FlatMemory, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    CPU::new(FlatMemory::from_image(program).unwrap())
}

#[test]
fn test_inc_register() {
    let mut cpu = setup_cpu(&[0x14]); // INC 4
    cpu.set_register(4, 0x12FF);
    cpu.step().unwrap();

    assert_eq!(cpu.register(4), 0x1300);
    assert_eq!(cpu.pc(), 0x0001);
}

#[test]
fn test_inc_wraps() {
    let mut cpu = setup_cpu(&[0x1F]); // INC F
    cpu.set_register(0xF, 0xFFFF);
    cpu.step().unwrap();
    assert_eq!(cpu.register(0xF), 0x0000);
}

#[test]
fn test_inc_does_not_touch_flags() {
    let mut cpu = setup_cpu(&[0x11]);
    cpu.set_register(1, 0xFFFF);
    cpu.set_d(0x77);
    cpu.set_df(false);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0x77);
    assert!(!cpu.df());
}

#[test]
fn test_dec_register() {
    let mut cpu = setup_cpu(&[0x2A]); // DEC A
    cpu.set_register(0xA, 0x1000);
    cpu.step().unwrap();
    assert_eq!(cpu.register(0xA), 0x0FFF);
}

#[test]
fn test_dec_wraps() {
    let mut cpu = setup_cpu(&[0x23]); // DEC 3
    cpu.set_register(3, 0x0000);
    cpu.step().unwrap();
    assert_eq!(cpu.register(3), 0xFFFF);
}

#[test]
fn test_inc_program_counter_register() {
    // INC 0 while R0 is the program counter skips the next byte
    let mut cpu = setup_cpu(&[0x10, 0x7B, 0xC4]);
    cpu.step().unwrap();
    assert_eq!(cpu.pc(), 0x0002);
}

#[test]
fn test_irx() {
    let mut cpu = setup_cpu(&[0x60]);
    cpu.set_x(2);
    cpu.set_register(2, 0x7FFF);
    cpu.step().unwrap();
    assert_eq!(cpu.register(2), 0x8000);
}

#[test]
fn test_glo_ghi() {
    let mut cpu = setup_cpu(&[0x85, 0x95]); // GLO 5 ; GHI 5
    cpu.set_register(5, 0xBEEF);

    cpu.step().unwrap();
    assert_eq!(cpu.d(), 0xEF);

    cpu.step().unwrap();
    assert_eq!(cpu.d(), 0xBE);
    assert_eq!(cpu.register(5), 0xBEEF);
}

#[test]
fn test_plo_phi() {
    // LDI 34 ; PLO 6 ; LDI 12 ; PHI 6
    let mut cpu = setup_cpu(&[0xF8, 0x34, 0xA6, 0xF8, 0x12, 0xB6]);
    cpu.set_register(6, 0xFFFF);

    cpu.run(2).unwrap();
    assert_eq!(cpu.register(6), 0xFF34);

    cpu.run(2).unwrap();
    assert_eq!(cpu.register(6), 0x1234);
}

#[test]
fn test_phi_program_counter_register() {
    // PHI 0 moves execution to another page
    let mut cpu = setup_cpu(&[0xF8, 0x20, 0xB0]);
    cpu.run(2).unwrap();
    assert_eq!(cpu.pc(), 0x2003);
}
