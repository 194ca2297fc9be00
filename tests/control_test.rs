//! Tests for control instructions (IDL, SEP, SEX, RET, DIS, REQ, SEQ)

use lib1802::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8]) -> CPU<FlatMemory> {
    CPU::new(FlatMemory::from_image(program).unwrap())
}

#[test]
fn test_idl_waits_in_place() {
    let mut cpu = setup_cpu(&[0x00]);
    cpu.set_d(0x12);

    cpu.run(10).unwrap();

    assert_eq!(cpu.pc(), 0x0000);
    assert_eq!(cpu.d(), 0x12);
    assert_eq!(cpu.instructions(), 10);
}

#[test]
fn test_sep_switches_program_counter() {
    let mut cpu = setup_cpu(&[0xD3]);
    cpu.memory_mut().write(0x0100, 0x7B); // SEQ
    cpu.set_register(3, 0x0100);

    cpu.step().unwrap();
    assert_eq!(cpu.p(), 3);
    assert_eq!(cpu.pc(), 0x0100);
    assert_eq!(cpu.register(0), 0x0001, "Old program counter keeps the return point");

    cpu.step().unwrap();
    assert!(cpu.q());
    assert_eq!(cpu.register(3), 0x0101);
}

#[test]
fn test_sep_subroutine_call_and_return() {
    // Main at 0x0000 runs with P=0 and calls a routine in R4 that returns with SEP 0.
    // 0000 SEP 4
    // 0001 SEQ
    // 0002 IDL
    // 0100 LDI 77
    // 0102 SEP 0
    let mut cpu = setup_cpu(&[0xD4, 0x7B, 0x00]);
    cpu.memory_mut().write(0x0100, 0xF8);
    cpu.memory_mut().write(0x0101, 0x77);
    cpu.memory_mut().write(0x0102, 0xD0);
    cpu.set_register(4, 0x0100);

    cpu.run(4).unwrap();

    assert_eq!(cpu.d(), 0x77);
    assert!(cpu.q());
    assert_eq!(cpu.p(), 0);
    assert_eq!(cpu.pc(), 0x0002);
    assert_eq!(cpu.register(4), 0x0103);
}

#[test]
fn test_sex_selects_data_pointer() {
    let mut cpu = setup_cpu(&[0xE9, 0xF0]); // SEX 9 ; LDX
    cpu.memory_mut().write(0x3000, 0x66);
    cpu.set_register(9, 0x3000);

    cpu.run(2).unwrap();

    assert_eq!(cpu.x(), 9);
    assert_eq!(cpu.data_pointer(), 0x3000);
    assert_eq!(cpu.d(), 0x66);
}

#[test]
fn test_sex_and_sep_may_alias() {
    // With X == P, LDXA reads the inline byte and steps over it
    let mut cpu = setup_cpu(&[0xE0, 0x72, 0x5E, 0xC4]);
    cpu.run(2).unwrap();

    assert_eq!(cpu.d(), 0x5E);
    assert_eq!(cpu.pc(), 0x0003);
}

#[test]
fn test_ret() {
    let mut cpu = setup_cpu(&[0xE2, 0x70]); // SEX 2 ; RET
    cpu.memory_mut().write(0x7000, 0x35);
    cpu.set_register(2, 0x7000);
    cpu.set_register(5, 0x0400);
    cpu.set_ie(false);

    cpu.run(2).unwrap();

    assert_eq!(cpu.x(), 3);
    assert_eq!(cpu.p(), 5);
    assert!(cpu.ie());
    assert_eq!(cpu.register(2), 0x7001);
    assert_eq!(cpu.pc(), 0x0400);
}

#[test]
fn test_dis() {
    let mut cpu = setup_cpu(&[0xE2, 0x71]); // SEX 2 ; DIS
    cpu.memory_mut().write(0x7000, 0x20);
    cpu.set_register(2, 0x7000);

    cpu.run(2).unwrap();

    assert_eq!(cpu.x(), 2);
    assert_eq!(cpu.p(), 0);
    assert!(!cpu.ie());
    assert_eq!(cpu.register(2), 0x7001);
    assert_eq!(cpu.pc(), 0x0002);
}

#[test]
fn test_req_seq() {
    let mut cpu = setup_cpu(&[0x7B, 0x7A, 0x7B]);

    cpu.step().unwrap();
    assert!(cpu.q());

    cpu.step().unwrap();
    assert!(!cpu.q());

    cpu.step().unwrap();
    assert!(cpu.q());
}
