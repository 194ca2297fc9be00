//! Tests for addition and subtraction
//!
//! DF is the carry out of bit 7. For the subtract forms DF=1 means "no borrow".

use lib1802::{FlatMemory, MemoryBus, CPU};

fn setup_cpu(program: &[u8], operand: u8) -> CPU<FlatMemory> {
    let mut cpu = CPU::new(FlatMemory::from_image(program).unwrap());
    cpu.set_register(2, 0x8000);
    cpu.set_x(2);
    cpu.memory_mut().write(0x8000, operand);
    cpu
}

// ========== ADD / ADI / ADC / ADCI ==========

#[test]
fn test_add_no_carry() {
    let mut cpu = setup_cpu(&[0xF4], 0x22);
    cpu.set_d(0x11);
    cpu.set_df(true);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0x33);
    assert!(!cpu.df(), "ADD ignores the incoming DF");
}

#[test]
fn test_add_with_carry_out() {
    let mut cpu = setup_cpu(&[0xF4], 0x01);
    cpu.set_d(0xFF);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0x00);
    assert!(cpu.df());
}

#[test]
fn test_adi() {
    let mut cpu = setup_cpu(&[0xFC, 0x90], 0x00);
    cpu.set_d(0x80);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0x10);
    assert!(cpu.df());
    assert_eq!(cpu.pc(), 0x0002);
}

#[test]
fn test_adc_uses_df() {
    let mut cpu = setup_cpu(&[0x74], 0x10);
    cpu.set_d(0x0F);
    cpu.set_df(true);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0x20);
    assert!(!cpu.df());
}

#[test]
fn test_adci_carry_chain() {
    let mut cpu = setup_cpu(&[0x7C, 0x00], 0x00);
    cpu.set_d(0xFF);
    cpu.set_df(true);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0x00);
    assert!(cpu.df());
}

#[test]
fn test_sixteen_bit_add() {
    // 0x12F0 + 0x0020 with ADI / ADCI on each half
    // GLO 5 ; ADI 20 ; PLO 5 ; GHI 5 ; ADCI 00 ; PHI 5
    let mut cpu = setup_cpu(&[0x85, 0xFC, 0x20, 0xA5, 0x95, 0x7C, 0x00, 0xB5], 0x00);
    cpu.set_register(5, 0x12F0);
    cpu.run(6).unwrap();

    assert_eq!(cpu.register(5), 0x1310);
    assert!(!cpu.df());
}

// ========== SD / SDI / SDB / SDBI ==========

#[test]
fn test_sd_without_borrow() {
    // D = M(R(X)) - D
    let mut cpu = setup_cpu(&[0xF5], 0x50);
    cpu.set_d(0x20);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0x30);
    assert!(cpu.df());
}

#[test]
fn test_sd_with_borrow() {
    let mut cpu = setup_cpu(&[0xF5], 0x20);
    cpu.set_d(0x50);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0xD0);
    assert!(!cpu.df());
}

#[test]
fn test_sd_equal_operands() {
    let mut cpu = setup_cpu(&[0xF5], 0x42);
    cpu.set_d(0x42);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0x00);
    assert!(cpu.df());
}

#[test]
fn test_sdi() {
    let mut cpu = setup_cpu(&[0xFD, 0x10], 0x00);
    cpu.set_d(0x01);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0x0F);
    assert!(cpu.df());
}

#[test]
fn test_sdb_with_pending_borrow() {
    let mut cpu = setup_cpu(&[0x75], 0x50);
    cpu.set_d(0x20);
    cpu.set_df(false);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0x2F);
    assert!(cpu.df());
}

#[test]
fn test_sdbi_without_pending_borrow() {
    let mut cpu = setup_cpu(&[0x7D, 0x50], 0x00);
    cpu.set_d(0x20);
    cpu.set_df(true);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0x30);
    assert!(cpu.df());
}

// ========== SM / SMI / SMB / SMBI ==========

#[test]
fn test_sm() {
    // D = D - M(R(X))
    let mut cpu = setup_cpu(&[0xF7], 0x20);
    cpu.set_d(0x50);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0x30);
    assert!(cpu.df());
}

#[test]
fn test_smi_with_borrow() {
    let mut cpu = setup_cpu(&[0xFF, 0x01], 0x00);
    cpu.set_d(0x00);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0xFF);
    assert!(!cpu.df());
}

#[test]
fn test_smb_with_pending_borrow() {
    let mut cpu = setup_cpu(&[0x77], 0x20);
    cpu.set_d(0x50);
    cpu.set_df(false);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0x2F);
    assert!(cpu.df());
}

#[test]
fn test_smbi_borrow_propagates() {
    let mut cpu = setup_cpu(&[0x7F, 0x00], 0x00);
    cpu.set_d(0x00);
    cpu.set_df(false);
    cpu.step().unwrap();

    assert_eq!(cpu.d(), 0xFF);
    assert!(!cpu.df());
}

#[test]
fn test_sixteen_bit_subtract() {
    // 0x1300 - 0x0001 with SMI / SMBI on each half
    // GLO 5 ; SMI 01 ; PLO 5 ; GHI 5 ; SMBI 00 ; PHI 5
    let mut cpu = setup_cpu(&[0x85, 0xFF, 0x01, 0xA5, 0x95, 0x7F, 0x00, 0xB5], 0x00);
    cpu.set_register(5, 0x1300);
    cpu.run(6).unwrap();

    assert_eq!(cpu.register(5), 0x12FF);
    assert!(cpu.df());
}
