/*!
# `EXIT`

## Purpose
Leaves the innermost `FOR` loop early.

## Remarks
Execution continues after the `NEXT` for the loop's variable found in a
later line. `EXIT` must be the last statement on its line and can only be
used in a stored program. If no such `NEXT` exists a `How?` error occurs.

## Example
```text
10 FOR I=1 TO 10
20 IF I=3 EXIT
30 PRINT I
40 NEXT I
50 PRINT "DONE"
RUN
1
2
DONE
```

*/
