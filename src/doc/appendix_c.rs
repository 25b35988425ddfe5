/*!
# Limits and Internals

All state lives in one block of 1300 bytes. From the bottom up it holds
the program, free space, the 26 variables and the stack.

```text
0           program end          variables         stack            1300
| lines ... | free / typing ...   | A B C ... Z     | FOR and GOSUB  |
```

Each stored line is its number as two bytes, a length byte, the text,
and a newline. Lines are kept in order so a jump is a walk from the top.
Text you type is placed just above the program before it is stored or
run. An answer to `INPUT` is placed just below the variables.

A stored line is refused with `Sorry!` when it would leave less free
space than a short command needs, so `NEW`, `LIST` or deleting a line
always still works on a full machine.

The stack has room for 60 bytes. A `FOR` loop takes 12 of them and a
`GOSUB` takes 5, so five loops can be nested.

Statements are interpreted from the stored text each time they run.
Nothing is compiled.

*/
