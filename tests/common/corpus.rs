//! Sample programs shared by the integration tests.

pub const HELLO: &str = r#"# Prints a greeting and a sum
# Author: someone

.data
greeting: .asciiz "Hello, world!\n"
numbers:  .word 3, 4, 5
.text
.globl main
main:
    la $a0, greeting     # load the greeting
    li $v0, 4
    syscall              # print it


    li $t0, 0            # running total
    la $t1, numbers



loop:   lw $t2, 0($t1)
    add $t0, $t0, $t2    # accumulate
    addi $t1, $t1, 4
    bne $t2, 5, loop
    # fall through when done

exit:
    move $a0, $t0
    li $v0, 1
    syscall
    li $v0, 10
    syscall
"#;

pub const ALREADY_FORMATTED: &str = "main:
\tli\t$v0, 1\t\t# print int
\tli\t$a0, 42
\tsyscall

# Helper that returns its argument doubled
double:
\tadd\t$v0, $a0, $a0
\tjr\t$ra
";

pub const CONTINUED_DIRECTIVE: &str = ".data
msg:
\t.asciiz
\t\t\"split directive\"
.text
main: la $a0, msg # label and code on one line
jr $ra
";

pub const CRLF: &str = "main:\r\n\tli $v0, 10 # exit\r\n\tsyscall\r\n";

pub const CORPUS: [&str; 4] = [HELLO, ALREADY_FORMATTED, CONTINUED_DIRECTIVE, CRLF];
