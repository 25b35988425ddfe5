/*!
# `IF <expression> [THEN] <statement>`

## Purpose
Runs the rest of the line only when the expression is not zero.

## Example
```text
10 INPUT A
20 IF A>10 THEN PRINT "BIG"
30 IF A<=10 PRINT "SMALL"
```

*/
