/*!
# `REM <comment>`

## Purpose
Ignores the rest of the line. `'` is the same as `REM`.

*/
