/*!
# `[LET] <variable>=<expression>`

## Purpose
Assigns a value to one of the variables `A` to `Z`.

## Example
```text
LET A=5
B=A*2
```

*/
