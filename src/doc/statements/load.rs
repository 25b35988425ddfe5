/*!
# `LOAD <filename>`

## Purpose
Replaces the program with one from a file.

## Remarks
The file is read as if its lines were typed in. The name may be quoted.
`CHAIN` does the same and then runs the program.

*/
