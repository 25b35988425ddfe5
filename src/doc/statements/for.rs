/*!
# `FOR <variable>=x TO y [STEP z]`
Where x, y, and z are expressions.
## Purpose
Used with `NEXT` to repeat statements over a sequence of numbers.

## Remarks
The variable is set to x. Statements run until a matching `NEXT`, which
adds z (or 1) to the variable. The loop repeats while the variable has
not passed y. The first iteration always runs.

Five loops can be nested. One more is a `Sorry!` error.

## Example
```text
10 FOR I=1 TO 7 STEP 2
20 PRINT I;" ";
30 NEXT I
RUN
1 3 5 7
```

*/
