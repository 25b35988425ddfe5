/*!
# `NEXT <variable>`

## Purpose
Ends a `FOR` loop.

## Remarks
The variable must be the one of the innermost loop, otherwise a `How?`
error occurs.

*/
