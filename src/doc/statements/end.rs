/*!
# `END`

## Purpose
Stops the program and returns to the `Ok` prompt.

## Remarks
`END` must be the last statement on its line. `STOP` is the same.

## Example
```text
10 PRINT "ONE"
20 END
30 PRINT "NEVER"
```

*/
