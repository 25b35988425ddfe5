/*!
# `GOTO <expression>`

## Purpose
Moves execution to the line with the computed number.

## Remarks
`GOTO` must be the last statement on its line. When the line does not
exist, execution continues at the next higher one.

## Example
```text
10 GOTO 30
20 PRINT "THIS WILL NOT PRINT"
30 PRINT "THIS WILL PRINT"
```

*/
