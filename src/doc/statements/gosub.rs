/*!
# `GOSUB <expression>`

## Purpose
Jumps to a subroutine. `RETURN` continues after the `GOSUB`.

## Remarks
The expression is evaluated to a line number. Execution continues at
that line, or the next higher one when it does not exist.

## Example
```text
10 GOSUB 100
20 END
100 PRINT "IN SUBROUTINE"
110 RETURN
```

*/
