use mos_core::Cpu;
use mos_core::cpu::state::{CARRY, NEGATIVE, OVERFLOW, ZERO};

fn build_demo_program() -> Vec<u8> {
    // Fill the first video row with the primary palette colors, then do a
    // little arithmetic so there is register state worth printing.
    let program: &[u8] = &[
        0xA2, 0x00, // LDX #$00
        0x8A, // loop: TXA
        0x9D, 0x00, 0x02, // STA $0200,X
        0xE8, // INX
        0xE0, 0x20, // CPX #$20
        0xD0, 0xF7, // BNE loop (-9, back to TXA)
        0xA9, 0x10, // LDA #$10
        0x69, 0x05, // ADC #$05 => A = 0x15
        0x00, // BRK
    ];
    program.to_vec()
}

fn main() {
    let program = build_demo_program();

    let mut cpu = Cpu::new();
    if let Err(e) = cpu.load_and_run(&program) {
        eprintln!("execution failed: {e}");
        std::process::exit(1);
    }

    // Inspect state
    println!("A:  0x{:02X}", cpu.a());
    println!("X:  0x{:02X}", cpu.x());
    println!("Y:  0x{:02X}", cpu.y());
    println!("SP: 0x{:02X}", cpu.sp());
    println!("PC: 0x{:04X}", cpu.pc());
    println!(
        "Flags: C={} Z={} V={} N={}",
        cpu.get_flag(CARRY) as u8,
        cpu.get_flag(ZERO) as u8,
        cpu.get_flag(OVERFLOW) as u8,
        cpu.get_flag(NEGATIVE) as u8
    );
    println!("Cycles: {}", cpu.cycles());
    println!("$0200: 0x{:02X}", cpu.mem_read(0x0200));

    #[cfg(feature = "screenshot")]
    {
        let path = std::path::Path::new("frame.png");
        match mos_core::video::screenshot::save_frame(cpu.memory(), path) {
            Ok(()) => println!("Screenshot saved to {}", path.display()),
            Err(e) => eprintln!("Screenshot error: {e}"),
        }
    }

    #[cfg(feature = "display")]
    {
        if let Err(e) = mos_core::video::display::show(cpu.memory()) {
            eprintln!("Display error: {e}");
            std::process::exit(1);
        }
    }
}
