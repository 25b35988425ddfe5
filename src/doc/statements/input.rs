/*!
# `INPUT <variable>`

## Purpose
Asks with `?` and stores the answer in the variable.

## Remarks
The answer is an expression and may use other variables. An answer
that does not evaluate is asked for again.

*/
