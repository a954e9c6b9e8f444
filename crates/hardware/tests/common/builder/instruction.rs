use rvpipe_core::isa::rv32i::funct3;
use rvpipe_core::isa::rv32i::funct7;
use rvpipe_core::isa::rv32i::opcodes::*;

/// Fluent RV32I encoder. Immediates are byte offsets / raw values; `lui` and
/// `auipc` take the 20-bit upper immediate unshifted.
pub struct InstructionBuilder {
    opcode: u32,
    rd: u32,
    funct3: u32,
    rs1: u32,
    rs2: u32,
    funct7: u32,
    imm: i32,
}

impl Default for InstructionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self {
            opcode: 0,
            rd: 0,
            funct3: 0,
            rs1: 0,
            rs2: 0,
            funct7: 0,
            imm: 0,
        }
    }

    fn reg(mut self, rd: u32, rs1: u32, rs2: u32, f3: u32, f7: u32) -> Self {
        self.opcode = OP_REG;
        self.rd = rd;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.funct3 = f3;
        self.funct7 = f7;
        self
    }

    fn imm_op(mut self, opcode: u32, rd: u32, rs1: u32, f3: u32, imm: i32) -> Self {
        self.opcode = opcode;
        self.rd = rd;
        self.rs1 = rs1;
        self.funct3 = f3;
        self.imm = imm;
        self
    }

    fn store(mut self, rs2: u32, rs1: u32, f3: u32, imm: i32) -> Self {
        self.opcode = OP_STORE;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.funct3 = f3;
        self.imm = imm;
        self
    }

    fn branch(mut self, rs1: u32, rs2: u32, f3: u32, imm: i32) -> Self {
        self.opcode = OP_BRANCH;
        self.rs1 = rs1;
        self.rs2 = rs2;
        self.funct3 = f3;
        self.imm = imm;
        self
    }

    // R-type

    pub fn add(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, funct3::ADD_SUB, funct7::DEFAULT)
    }

    pub fn sub(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, funct3::ADD_SUB, funct7::ALT)
    }

    pub fn slt(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, funct3::SLT, funct7::DEFAULT)
    }

    pub fn sltu(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, funct3::SLTU, funct7::DEFAULT)
    }

    pub fn sra(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, funct3::SRL_SRA, funct7::ALT)
    }

    pub fn srl(self, rd: u32, rs1: u32, rs2: u32) -> Self {
        self.reg(rd, rs1, rs2, funct3::SRL_SRA, funct7::DEFAULT)
    }

    // I-type

    pub fn addi(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_IMM, rd, rs1, funct3::ADD_SUB, imm)
    }

    pub fn srai(self, rd: u32, rs1: u32, shamt: u32) -> Self {
        let imm = ((funct7::ALT << 5) | (shamt & 0x1F)) as i32;
        self.imm_op(OP_IMM, rd, rs1, funct3::SRL_SRA, imm)
    }

    pub fn lb(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_LOAD, rd, rs1, funct3::LB, imm)
    }

    pub fn lh(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_LOAD, rd, rs1, funct3::LH, imm)
    }

    pub fn lw(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_LOAD, rd, rs1, funct3::LW, imm)
    }

    pub fn lbu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_LOAD, rd, rs1, funct3::LBU, imm)
    }

    pub fn lhu(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_LOAD, rd, rs1, funct3::LHU, imm)
    }

    pub fn jalr(self, rd: u32, rs1: u32, imm: i32) -> Self {
        self.imm_op(OP_JALR, rd, rs1, funct3::JALR, imm)
    }

    // S-type: store rs2 to imm(rs1)

    pub fn sb(self, rs2: u32, rs1: u32, imm: i32) -> Self {
        self.store(rs2, rs1, funct3::SB, imm)
    }

    pub fn sh(self, rs2: u32, rs1: u32, imm: i32) -> Self {
        self.store(rs2, rs1, funct3::SH, imm)
    }

    pub fn sw(self, rs2: u32, rs1: u32, imm: i32) -> Self {
        self.store(rs2, rs1, funct3::SW, imm)
    }

    // B-type

    pub fn beq(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(rs1, rs2, funct3::BEQ, imm)
    }

    pub fn bne(self, rs1: u32, rs2: u32, imm: i32) -> Self {
        self.branch(rs1, rs2, funct3::BNE, imm)
    }

    // U/J-type

    pub fn lui(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = OP_LUI;
        self.rd = rd;
        self.imm = imm;
        self
    }

    pub fn auipc(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = OP_AUIPC;
        self.rd = rd;
        self.imm = imm;
        self
    }

    pub fn jal(mut self, rd: u32, imm: i32) -> Self {
        self.opcode = OP_JAL;
        self.rd = rd;
        self.imm = imm;
        self
    }

    pub fn ecall(mut self) -> Self {
        self.opcode = OP_SYSTEM;
        self
    }

    pub fn build(self) -> u32 {
        let opcode = self.opcode & 0x7F;
        let rd = (self.rd & 0x1F) << 7;
        let funct3 = (self.funct3 & 0x7) << 12;
        let rs1 = (self.rs1 & 0x1F) << 15;
        let rs2 = (self.rs2 & 0x1F) << 20;
        let funct7 = (self.funct7 & 0x7F) << 25;
        let imm_val = self.imm as u32;

        match opcode {
            OP_REG => funct7 | rs2 | rs1 | funct3 | rd | opcode,
            OP_IMM | OP_LOAD | OP_JALR => ((imm_val & 0xFFF) << 20) | rs1 | funct3 | rd | opcode,
            OP_STORE => {
                let imm_11_5 = ((imm_val >> 5) & 0x7F) << 25;
                let imm_4_0 = (imm_val & 0x1F) << 7;
                imm_11_5 | rs2 | rs1 | funct3 | imm_4_0 | opcode
            }
            OP_BRANCH => {
                let bit_12 = ((imm_val >> 12) & 0x1) << 31;
                let bits_10_5 = ((imm_val >> 5) & 0x3F) << 25;
                let bits_4_1 = ((imm_val >> 1) & 0xF) << 8;
                let bit_11 = ((imm_val >> 11) & 0x1) << 7;
                bit_12 | bits_10_5 | rs2 | rs1 | funct3 | bits_4_1 | bit_11 | opcode
            }
            OP_LUI | OP_AUIPC => ((imm_val & 0xFFFFF) << 12) | rd | opcode,
            OP_JAL => {
                let bit_20 = ((imm_val >> 20) & 0x1) << 31;
                let bits_10_1 = ((imm_val >> 1) & 0x3FF) << 21;
                let bit_11 = ((imm_val >> 11) & 0x1) << 20;
                let bits_19_12 = ((imm_val >> 12) & 0xFF) << 12;
                bit_20 | bits_10_1 | bit_11 | bits_19_12 | rd | opcode
            }
            OP_SYSTEM => ECALL,
            _ => panic!("Unsupported opcode: {:#x}", opcode),
        }
    }
}

/// Shorthand for `InstructionBuilder::new()`.
pub fn inst() -> InstructionBuilder {
    InstructionBuilder::new()
}
